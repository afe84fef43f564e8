use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use concrete_names::error::ProjectResult;
use concrete_names::fresh::first_non_taken_name;
use concrete_names::{
  CodeRange, IsNoName, Mixfix, Name, NotInScope, NumHoles, QName, TopLevelModuleName,
};
use itertools::Itertools;

/// Inspect concrete names and the files of the modules they denote
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Extension of source files, with or without the leading dot
  #[arg(long, env = "NAMEX_EXT", default_value = "lang", global = true)]
  pub ext: String,
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Split a raw name into its mixfix parts and classify it
  Parts { raw: String },
  /// Print the source file of a dotted module name, relative to the root
  Module { name: String },
  /// Print the project root a module was resolved against
  Root { name: String, file: PathBuf },
  /// Print the module name a file under a project root is loaded as
  Locate { root: PathBuf, file: PathBuf },
  /// Mark a qualified name as not in scope
  Mark { name: String },
  /// Remove the not-in-scope mark from a qualified name
  Unmark { name: String },
  /// Print the first variation of a name that is not taken
  Next {
    raw: String,
    /// Names that are already taken
    #[arg(short, long)]
    taken: Vec<String>,
  },
}

fn describe(raw: &str) -> String {
  let x = Name::from_raw(CodeRange::Unknown, raw);
  let fixity = x.fixity().map_or("none".to_string(), |f| format!("{f:?}").to_lowercase());
  format!(
    "parts: {}\nfixity: {fixity}\nholes: {}\noperator: {}\nopen: {}\nno-name: {}",
    x.printed_parts().iter().map(|p| format!("{p:?}")).join(" "),
    x.num_holes(),
    x.is_operator(),
    x.is_open_mixfix(),
    x.is_no_name(),
  )
}

fn run(args: Args) -> ProjectResult<String> {
  let qname = |s: &str| QName::parse(CodeRange::Unknown, s);
  Ok(match args.command {
    Command::Parts { raw } => describe(&raw),
    Command::Module { name } => {
      let m = TopLevelModuleName::parse(CodeRange::Unknown, &name)?;
      m.to_file_name(&args.ext).display().to_string()
    },
    Command::Root { name, file } => {
      let m = TopLevelModuleName::parse(CodeRange::Unknown, &name)?;
      m.project_root(&file).display().to_string()
    },
    Command::Locate { root, file } =>
      TopLevelModuleName::from_file_name(&root, &file, &args.ext)?.to_string(),
    Command::Mark { name } => qname(&name).mark_not_in_scope().to_string(),
    Command::Unmark { name } => qname(&name).remove_not_in_scope().to_string(),
    Command::Next { raw, taken } => {
      let taken = (taken.iter()).map(|s| Name::from_raw(CodeRange::Unknown, s)).collect_vec();
      let x = Name::from_raw(CodeRange::Unknown, &raw);
      match first_non_taken_name(|n| taken.contains(n), x) {
        Some(x) => x.to_string(),
        None => format!("{raw} is taken and has no variations"),
      }
    },
  })
}

pub fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args = Args::parse();
  log::debug!("{args:?}");
  match run(args) {
    Ok(out) => println!("{out}"),
    Err(e) => {
      eprintln!("{e}");
      process::exit(1)
    },
  }
}
