//! Saved default flags.
//!
//! Config files hold the same flag tokens as the command line, one or
//! more per line, with `#` comments. Later sources win: global file,
//! then local `.pixgridrc`, then the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::canvas::{Ink, Palette, ParseColorError, Rgb, Slot};

/// A flag in a config file whose value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("{flag}: {source}")]
    InvalidColor {
        flag: String,
        source: ParseColorError,
    },
    #[error("--pen expects 0, 1, 2 or 3, found {0:?}")]
    InvalidPen(String),
    #[error("{0} needs a value")]
    MissingValue(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub colors: [Option<Rgb>; 3],
    pub pen: Option<Ink>,
    pub print_on_exit: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        let mut colors = self.colors;
        for (mine, theirs) in colors.iter_mut().zip(other.colors) {
            *mine = theirs.or(*mine);
        }
        Self {
            colors,
            pen: other.pen.or(self.pen),
            print_on_exit: self.print_on_exit || other.print_on_exit,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Default palette with configured colors applied.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for (slot, color) in Slot::ALL.into_iter().zip(self.colors) {
            if let Some(color) = color {
                palette.set(slot, color);
            }
        }
        palette
    }

    pub fn pen(&self) -> Ink {
        self.pen.unwrap_or(Ink::One)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("pixgrid").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("pixgrid")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pixgrid").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("pixgrid")
                .join("config");
        }
    }

    PathBuf::from(".pixgridrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".pixgridrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    parse_flag_tokens(&tokens).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# pixgrid defaults (saved with --save)".to_string());
    for (i, color) in flags.colors.iter().enumerate() {
        if let Some(color) = color {
            lines.push(format!("--color{} {color}", i + 1));
        }
    }
    if let Some(pen) = flags.pen {
        lines.push(format!("--pen {}", pen.value()));
    }
    if flags.print_on_exit {
        lines.push("--print-on-exit".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from config tokens, ignoring unknown ones.
///
/// # Errors
///
/// A known flag with a missing or malformed value is an error, so a bad
/// saved default is reported at startup instead of silently dropped.
pub fn parse_flag_tokens(tokens: &[String]) -> Result<ConfigFlags, FlagError> {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let takes_value = matches!(
            name,
            "--color1" | "--color2" | "--color3" | "--pen" | "--log-file"
        );
        let value = if takes_value && inline_value.is_none() {
            i += 1;
            tokens.get(i).map(String::as_str)
        } else {
            inline_value
        };

        match (name, value) {
            ("--print-on-exit", None) => flags.print_on_exit = true,
            ("--color1", Some(v)) => flags.colors[0] = Some(parse_color(name, v)?),
            ("--color2", Some(v)) => flags.colors[1] = Some(parse_color(name, v)?),
            ("--color3", Some(v)) => flags.colors[2] = Some(parse_color(name, v)?),
            ("--pen", Some(v)) => flags.pen = Some(parse_pen(v)?),
            ("--log-file", Some(v)) => flags.log_file = Some(PathBuf::from(v)),
            (name, None) if takes_value => return Err(FlagError::MissingValue(name.to_string())),
            _ => {}
        }
        i += 1;
    }
    Ok(flags)
}

fn parse_color(flag: &str, value: &str) -> Result<Rgb, FlagError> {
    value.parse().map_err(|source| FlagError::InvalidColor {
        flag: flag.to_string(),
        source,
    })
}

fn parse_pen(value: &str) -> Result<Ink, FlagError> {
    value
        .parse::<u64>()
        .ok()
        .and_then(Ink::from_value)
        .ok_or_else(|| FlagError::InvalidPen(value.to_string()))
}
