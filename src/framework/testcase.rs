use crate::core::Command;
use crate::framework::executor::Executor;
use crate::framework::report::CaseReport;

/// An ordered list of commands run against one shared fixture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub commands: Vec<Command>,
    pub skip: bool,
}

impl TestCase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn add(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }

    pub fn api_count(&self) -> usize {
        self.commands.iter().map(|c| c.apis.len()).sum()
    }

    pub fn execute(&self, executor: &Executor) -> CaseReport {
        executor.run_case(self)
    }
}
