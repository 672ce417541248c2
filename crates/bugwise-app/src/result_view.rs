//! Display state of the analysis result region

use bugwise_core::Analysis;

/// Projection of an [`Analysis`] onto the result region.
///
/// Rendering is synchronous and replaces every field, so the last record
/// rendered is the one shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    explanation: String,
    root_cause: String,
    fix_steps: Vec<String>,
    example_code: String,
    visible: bool,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `analysis` in the result region.
    pub fn render(&mut self, analysis: &Analysis) {
        self.explanation.clone_from(&analysis.explanation);
        self.root_cause.clone_from(&analysis.root_cause);

        self.fix_steps.clear();
        for step in &analysis.fix_steps {
            self.fix_steps.push(step.clone());
        }

        self.example_code.clone_from(&analysis.example_code);
        self.visible = true;
    }

    /// Hide the region. Content is kept for the next reveal.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn root_cause(&self) -> &str {
        &self.root_cause
    }

    pub fn fix_steps(&self) -> &[String] {
        &self.fix_steps
    }

    pub fn example_code(&self) -> &str {
        &self.example_code
    }

    /// The four displayed fields as an [`Analysis`]
    pub fn snapshot(&self) -> Analysis {
        Analysis::new(
            self.explanation.clone(),
            self.root_cause.clone(),
            self.fix_steps.clone(),
            self.example_code.clone(),
        )
    }
}
