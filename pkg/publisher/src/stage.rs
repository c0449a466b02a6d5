use pkg_types::map::MapId;

/// A single step of a map workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Create,
    Configure,
    Tooltip,
    PushData,
    Timestamp,
    Publish,
    WriteArtifact,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Create => write!(f, "create"),
            Stage::Configure => write!(f, "configure"),
            Stage::Tooltip => write!(f, "tooltip"),
            Stage::PushData => write!(f, "push-data"),
            Stage::Timestamp => write!(f, "timestamp"),
            Stage::Publish => write!(f, "publish"),
            Stage::WriteArtifact => write!(f, "write-artifact"),
        }
    }
}

/// What happened when a stage ran.
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: Stage,
    /// The identifier the stage ran against, if one existed.
    pub map_id: Option<MapId>,
    pub result: anyhow::Result<()>,
}

impl StageOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Ordered outcomes of every stage attempted in one run.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<StageOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: StageOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[StageOutcome] {
        &self.outcomes
    }

    /// Stages in the order they were attempted.
    pub fn stages(&self) -> Vec<Stage> {
        self.outcomes.iter().map(|o| o.stage).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StageOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(StageOutcome::is_ok)
    }

    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.outcomes.iter().find(|o| o.stage == stage)
    }
}
