use clap::Parser;
use std::path::PathBuf;

pub const BANNER: &str = r"
   _____                           _____       _
  / ____|                         |  __ \     | |
 | |     _   _ _ __ ___  ___  _ __| |__) |   _| | ___  ___
 | |    | | | | '__/ __|/ _ \| '__|  _  / | | | |/ _ \/ __|
 | |____| |_| | |  \__ \ (_) | |  | | \ \ |_| | |  __/\__ \
  \_____|\__,_|_|  |___/\___/|_|  |_|  \_\__,_|_|\___||___/
";

#[derive(Parser, Debug)]
#[command(name = "crrl", version, before_help = BANNER)]
#[command(about = "CLI to fetch and save .cursorrules files", long_about = None)]
pub struct Cli {
    /// Remote URL of the .cursorrules file
    #[arg(short, long)]
    pub url: Option<String>,

    /// Local directory to save the file (defaults to the current directory)
    #[arg(short, long, value_name = "DIRECTORY")]
    pub dir: Option<PathBuf>,
}
