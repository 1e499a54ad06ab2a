mod gemini;
mod prompt;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use taskintent_core::{
    fallback_result, parse_model_output, ClassificationResult, ClassificationSource, ModelOutput,
};
use taskintent_observability::ClassifierMetrics;
use tracing::{info, warn};

pub use gemini::{ConfigError, GeminiClient, GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use prompt::{build_prompt, INTENT_CLASSIFIER_PROMPT};

#[derive(Debug, Clone)]
pub struct IntentPrediction {
    pub result: ClassificationResult,
    pub source: ClassificationSource,
}

impl IntentPrediction {
    fn fallback(text: &str) -> Self {
        Self {
            result: fallback_result(text),
            source: ClassificationSource::Fallback,
        }
    }
}

pub trait TextGenerator: Send + Sync {
    fn model_name(&self) -> &str;

    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

pub trait IntentClassifier: Send + Sync {
    fn predict(&self, text: &str) -> impl Future<Output = IntentPrediction> + Send;
}

#[derive(Debug, Default)]
pub struct RuleIntentClassifier;

impl IntentClassifier for RuleIntentClassifier {
    async fn predict(&self, text: &str) -> IntentPrediction {
        IntentPrediction::fallback(text)
    }
}

pub struct ModelIntentClassifier<G> {
    generator: G,
    metrics: Arc<ClassifierMetrics>,
}

impl<G> ModelIntentClassifier<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G, metrics: Arc<ClassifierMetrics>) -> Self {
        Self { generator, metrics }
    }

    pub fn metrics(&self) -> &Arc<ClassifierMetrics> {
        &self.metrics
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    fn interpret(&self, text: &str, output: ModelOutput) -> IntentPrediction {
        match output {
            ModelOutput::Valid(result) => IntentPrediction {
                result,
                source: ClassificationSource::Model,
            },
            unusable => {
                warn!(
                    model = self.generator.model_name(),
                    outcome = ?unusable,
                    "model output unusable, using fallback rules"
                );
                IntentPrediction::fallback(text)
            }
        }
    }
}

impl<G> IntentClassifier for ModelIntentClassifier<G>
where
    G: TextGenerator,
{
    async fn predict(&self, text: &str) -> IntentPrediction {
        let started = Instant::now();
        self.metrics.inc_classification();
        self.metrics.inc_model_call();

        let prediction = match self.generator.generate(&build_prompt(text)).await {
            Ok(raw) => self.interpret(text, parse_model_output(&raw)),
            Err(err) => {
                self.metrics.inc_model_failure();
                warn!(
                    model = self.generator.model_name(),
                    error = %format!("{err:#}"),
                    "model call failed, using fallback rules"
                );
                IntentPrediction::fallback(text)
            }
        };

        if prediction.source == ClassificationSource::Fallback {
            self.metrics.inc_fallback();
        }
        self.metrics.observe_latency(started.elapsed());

        info!(
            model = self.generator.model_name(),
            intent = %prediction.result.intent,
            source = prediction.source.as_str(),
            "message classified"
        );

        prediction
    }
}
