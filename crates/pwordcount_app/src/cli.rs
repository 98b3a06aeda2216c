use std::path::PathBuf;

use clap::{ArgAction, Parser};
use wordcount_engine::{PipelineConfig, DEFAULT_CHUNK_SIZE};

/// Count the words in a file using two processes connected by pipes.
#[derive(Debug, Parser)]
#[command(name = "pwordcount", version)]
pub struct Cli {
    /// File whose words are counted.
    #[arg(value_name = "FILE_NAME")]
    pub file_name: Option<PathBuf>,

    /// Anything after the file name is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Bytes moved per read on the file and on the data pipe.
    #[arg(
        long,
        value_name = "BYTES",
        env = "PWORDCOUNT_CHUNK_SIZE",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = parse_chunk_size
    )]
    pub chunk_size: usize,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            chunk_size: self.chunk_size,
        }
    }
}

fn parse_chunk_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|err| format!("invalid chunk size {raw:?}: {err}"))?;
    if size == 0 {
        return Err("chunk size must be greater than zero".to_string());
    }
    Ok(size)
}

/// Printed to stdout when no file name was given.
pub fn print_usage() {
    println!("Please enter a file name.");
    println!("Usage: ./pwordcount <file_name>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["pwordcount", "notes.txt"]).unwrap();
        assert_eq!(cli.file_name, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.pipeline_config(), PipelineConfig::default());
    }

    #[test]
    fn file_name_is_optional_for_the_parser() {
        let cli = Cli::try_parse_from(["pwordcount"]).unwrap();
        assert_eq!(cli.file_name, None);
    }

    #[test]
    fn chunk_size_and_verbosity() {
        let cli =
            Cli::try_parse_from(["pwordcount", "-vv", "--chunk-size", "16", "notes.txt"]).unwrap();
        assert_eq!(cli.chunk_size, 16);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn arguments_after_the_file_name_are_ignored() {
        let cli = Cli::try_parse_from(["pwordcount", "notes.txt", "extra", "-x"]).unwrap();
        assert_eq!(cli.file_name, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.ignored, vec!["extra".to_string(), "-x".to_string()]);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(Cli::try_parse_from(["pwordcount", "--chunk-size", "0", "notes.txt"]).is_err());
        assert!(Cli::try_parse_from(["pwordcount", "--chunk-size", "lots", "notes.txt"]).is_err());
    }
}
