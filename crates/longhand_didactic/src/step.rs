use serde::Serialize;

/// One line of shown work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StepRecord {
    /// What is being done.
    pub description: String,
    /// How it is done (the arithmetic written out).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub work: String,
    /// What came out of it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub result: String,
}

impl StepRecord {
    pub fn new(
        description: impl Into<String>,
        work: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            work: work.into(),
            result: result.into(),
        }
    }

    /// Single-line scratchpad form: `description: work => result`,
    /// dropping the parts that are empty.
    pub fn scratch_line(&self) -> String {
        match (self.work.is_empty(), self.result.is_empty()) {
            (true, true) => self.description.clone(),
            (false, true) => format!("{}: {}", self.description, self.work),
            (true, false) => format!("{} => {}", self.description, self.result),
            (false, false) => format!("{}: {} => {}", self.description, self.work, self.result),
        }
    }
}

/// Ordered, append-only log of the steps taken during one solve.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<StepRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        description: impl Into<String>,
        work: impl Into<String>,
        result: impl Into<String>,
    ) {
        self.steps.push(StepRecord::new(description, work, result));
    }

    /// Record a step that has a description only.
    pub fn note(&mut self, description: impl Into<String>) {
        self.record(description, "", "");
    }

    /// Record a step with a description and the work shown, no result.
    pub fn work(&mut self, description: impl Into<String>, work: impl Into<String>) {
        self.record(description, work, "");
    }

    pub fn reset(&mut self) {
        self.steps.clear();
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Owned copy of the log, in recording order.
    pub fn dump(&self) -> Vec<StepRecord> {
        self.steps.clone()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }
}

/// An answer together with the work that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved<T> {
    pub value: T,
    pub trace: Trace,
}

impl<T> Solved<T> {
    pub fn new(value: T, trace: Trace) -> Self {
        Self { value, trace }
    }

    pub fn into_parts(self) -> (T, Trace) {
        (self.value, self.trace)
    }
}
