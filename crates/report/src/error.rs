// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Font registration failed.
    FontError(String),
    /// Document assembly or serialization failed.
    RenderError(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::RenderError(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}
