use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scardoc")]
#[command(about = "Scripting API documentation blob generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an XML API description into a scardoc blob
    Generate {
        /// Input XML description
        #[arg(default_value = "function_list.xml")]
        input: String,
        /// Output blob path
        #[arg(short, long, default_value = "scardoc.dat")]
        output: String,
        /// Write straight into the output file instead of renaming a temp file over it
        #[arg(long)]
        direct: bool,
    },
    /// Print the entries parsed from an XML API description
    Inspect {
        /// Input XML description
        #[arg(default_value = "function_list.xml")]
        input: String,
    },
}
