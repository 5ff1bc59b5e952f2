// Shared test doubles for driving the pipeline without touching the
// host: a recording command runner and a scripted prompter, both
// injected through the installer's capability seams.

#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use setup_mobiledev::error::SetupError;
use setup_mobiledev::executor::CommandRunner;
use setup_mobiledev::prompt::Prompter;

/// Command-runner double.
///
/// Records every `run` invocation as a single display line and every
/// probed tool name. Probes answer from a configured set of "present"
/// tools; `run` fails with status 1 for any command line containing a
/// configured fragment.
#[derive(Default)]
pub struct FakeRunner {
    present: HashSet<String>,
    fail_on: Vec<String>,
    commands: Rc<RefCell<Vec<String>>>,
    probes: Rc<RefCell<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a tool as present, so its existence probe succeeds.
    pub fn with_present(mut self, tool: &str) -> Self {
        self.present.insert(tool.to_string());
        self
    }

    /// Makes any command line containing `fragment` fail with status 1.
    pub fn failing_on(mut self, fragment: &str) -> Self {
        self.fail_on.push(fragment.to_string());
        self
    }

    /// Shared handle to the recorded `run` invocations, usable after
    /// the runner has been boxed into an installer.
    pub fn commands(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.commands)
    }

    /// Shared handle to the recorded probe names.
    pub fn probes(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.probes)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), SetupError> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.commands.borrow_mut().push(line.clone());

        if self.fail_on.iter().any(|fragment| line.contains(fragment)) {
            return Err(SetupError::CommandFailed {
                command: line,
                status: 1,
            });
        }
        Ok(())
    }

    fn probe(&self, name: &str) -> bool {
        self.probes.borrow_mut().push(name.to_string());
        self.present.contains(name)
    }
}

/// Prompter double that replays scripted responses and records every
/// prompt it was asked. Runs out of script gracefully: further asks
/// return an empty line, the same as a user just pressing enter.
#[derive(Default)]
pub struct FakePrompter {
    responses: VecDeque<String>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl FakePrompter {
    pub fn with_responses(responses: &[&str]) -> Self {
        FakePrompter {
            responses: responses.iter().map(|r| r.to_string()).collect(),
            prompts: Rc::default(),
        }
    }

    /// A prompter that answers "n" to everything.
    pub fn declining() -> Self {
        Self::with_responses(&["n"])
    }

    /// Shared handle to the prompts asked so far.
    pub fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.prompts)
    }
}

impl Prompter for FakePrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, SetupError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.responses.pop_front().unwrap_or_default())
    }
}
