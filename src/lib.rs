//! Read-only access to bazaar branches through the `bzr` command line.
//!
//! ```no_run
//! use bzrwrapper::Branch;
//!
//! let branch = Branch::open("/home/rp/devel/rubzr")?;
//! println!("{}", branch.info());
//! for commit in branch.last_commits(2)? {
//!     println!("{}", commit);
//! }
//! # Ok::<(), bzrwrapper::BzrError>(())
//! ```

pub mod branch;
pub mod bzr;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod history;
pub mod info;
pub mod timestamp;

pub use branch::Branch;
pub use bzr::commands::LogOptions;
pub use bzr::{BzrCli, CommandRunner};
pub use commit::Commit;
pub use error::{BzrError, Result};
pub use history::Log;
pub use info::BranchInfo;
