use crate::commands::toc::{LocateCommand, RawCommand, ReadCommand};
use clap::{Parser, Subcommand};

pub mod toc;

/// CLI for reading the table of contents of audio CDs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Read(ReadCommand),
    Raw(RawCommand),
    Locate(LocateCommand),
}
