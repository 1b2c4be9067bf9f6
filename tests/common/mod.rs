#![allow(dead_code)]

pub mod fixtures;

use bzrwrapper::{BzrError, CommandRunner, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum Response {
    Lines(Vec<String>),
    Fail(String),
}

/// Runner answering from canned output, keyed by the joined arguments.
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: HashMap<String, Response>,
    calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, args: &str, output: &str) -> Self {
        let lines = output.lines().map(str::to_string).collect();
        self.responses.insert(args.to_string(), Response::Lines(lines));
        self
    }

    pub fn fail(mut self, args: &str, stderr: &str) -> Self {
        self.responses
            .insert(args.to_string(), Response::Fail(stderr.to_string()));
        self
    }

    /// Handle on the recorded calls that stays valid after the runner is moved.
    pub fn calls(&self) -> Rc<RefCell<Vec<Vec<String>>>> {
        Rc::clone(&self.calls)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, args: &[String], _dir: &Path) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(args.to_vec());

        let key = args.join(" ");
        match self.responses.get(&key) {
            Some(Response::Lines(lines)) => Ok(lines.clone()),
            Some(Response::Fail(stderr)) => Err(BzrError::CommandFailed {
                command: format!("bzr {}", key),
                output: stderr.clone(),
            }),
            None => Err(BzrError::CommandFailed {
                command: format!("bzr {}", key),
                output: "unexpected command".to_string(),
            }),
        }
    }
}
