use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fsmith_lib::{Error, Pattern};

/// Expression text as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprSource {
    pub text: Option<String>,
    pub path: Option<PathBuf>,
    pub postfix: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("expression is required: use positional argument or -f/--file")]
    Missing,

    #[error("failed to read {}: {source}", display_path(.path))]
    Read { path: PathBuf, source: io::Error },
}

fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

impl ExprSource {
    /// The expression text. File contents lose their trailing line break.
    pub fn read(&self) -> Result<String, LoadError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        let Some(path) = &self.path else {
            return Err(LoadError::Missing);
        };
        let read_error = |source| LoadError::Read {
            path: path.clone(),
            source,
        };

        let mut text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(read_error)?;
            buf
        } else {
            fs::read_to_string(path).map_err(read_error)?
        };

        let trimmed = text.trim_end_matches(['\n', '\r']).len();
        text.truncate(trimmed);
        Ok(text)
    }

    pub fn compile(&self, text: &str) -> Result<Pattern, Error> {
        if self.postfix {
            Pattern::from_postfix(text)
        } else {
            Pattern::from_infix(text)
        }
    }
}

/// Read and compile the expression, or report the error and exit with 1.
pub fn load_pattern(source: &ExprSource, color: bool) -> Pattern {
    let text = match source.read() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let pattern = match source.compile(&text) {
        Ok(pattern) => pattern,
        Err(Error::Syntax(e)) => {
            eprint!("{}", e.render(&text, color));
            eprintln!();
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if pattern.is_empty_expression() {
        log::warn!("empty expression: only the empty string matches");
    }
    log::debug!("compiled {:?} to postfix {:?}", text, pattern.postfix());
    pattern
}
