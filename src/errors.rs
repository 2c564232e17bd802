// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render.  None of these are recoverable;
//! the binaries report them and exit.

use std::io;

/// The failures a render can run into.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The image size or the complex plane corners do not describe a
    /// usable rectangle.
    #[fail(display = "invalid viewport: {}", _0)]
    InvalidViewport(String),

    /// One of the startup checks on the platform's byte order helpers
    /// came back wrong.
    #[fail(display = "self-check failed: {}", _0)]
    SelfCheck(&'static str),

    /// A worker thread panicked before the render finished.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// After the join, a row was missing or delivered more than once.
    #[fail(display = "row {} was rendered {} times", row, count)]
    RowAccounting {
        /// The offending row.
        row: usize,
        /// How many workers delivered it.
        count: usize,
    },

    /// The output file could not be written.
    #[fail(display = "could not write {}: {}", path, cause)]
    Write {
        /// Where we were writing to.
        path: String,
        /// What went wrong.
        #[cause]
        cause: io::Error,
    },
}
