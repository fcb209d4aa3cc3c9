// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ror Developer Tools
//!
//! Build-time helpers for the ror engine.
//!
//! # Features
//!
//! - **Event-Handle Generation:** Emits one named `create_event_handle`
//!   constant per valid (type, code, modifier, state) combination
//! - **YCM Flag Extraction:** Aggregates compiler flags from a
//!   `compile_commands.json` into a `.ycm_extra_conf.py`
//!
//! # Architecture
//!
//! - **`events`:** Event taxonomies, exclusion rules, declaration generator
//! - **`flags`:** Compilation database loading, flag scanning and
//!   aggregation, template rendering, guarded atomic output
//!
//! Both tools are single-pass and deterministic: the same inputs always
//! produce byte-identical output.
//!
//! # Examples
//!
//! ## Generating event handles
//!
//! ```
//! use ror_devtools::events::write_declarations;
//!
//! let mut out = Vec::new();
//! let total = write_declarations(&mut out)?;
//! assert_eq!(total, 6703);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Aggregating flags
//!
//! ```
//! use ror_devtools::flags::{CompileEntry, FlagMap};
//!
//! let entries = vec![CompileEntry::from_command("g++ -O2 -c a.cpp -o a.o")];
//! let flags = FlagMap::from_entries(&entries);
//!
//! assert_eq!(flags.get("-O2"), Some(""));
//! assert!(!flags.contains("-o"));
//! ```
//!
//! ## Writing a YCM configuration
//!
//! ```no_run
//! use ror_devtools::flags::{run, Outcome, Prompt};
//! use std::path::Path;
//!
//! match run(Path::new("build"), &mut Prompt::stdio())? {
//!     Outcome::Written(path) => println!("Wrote {}", path.display()),
//!     Outcome::Declined => {}
//! }
//! # Ok::<(), ror_devtools::flags::FlagsError>(())
//! ```

pub mod events;
pub mod flags;

// Re-export commonly used types for convenience
pub use events::{Candidate, EventHandle};
pub use flags::{FlagMap, FlagsError};
