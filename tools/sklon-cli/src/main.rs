use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sklon_morph::{
    decline_name, decline_patronymic, decline_profession, decline_surname, decline_word,
    decline_word_plural, infer_sex_from_patronymic, name_to_nominative, profession_to_base,
};
use sklon_parser::{decline_collocation, DictionaryCache, DictionaryConfig, LoadOutcome};
use sklon_protocol::{Case, Gender};

#[derive(Parser)]
#[command(author, version, about = "Declines Russian names, titles and phrases")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decline a first name
    Name(PersonArgs),
    /// Decline a patronymic
    Patronymic(PersonArgs),
    /// Decline a surname
    Surname(PersonArgs),
    /// Decline a job title, word by word
    Profession {
        title: String,
        #[arg(short, long)]
        case: Case,
    },
    /// Bring a declined job title back to the nominative
    ProfessionBase { title: String },
    /// Decline a common noun or adjective
    Word {
        word: String,
        #[arg(short, long)]
        case: Case,
        /// Decline into the plural
        #[arg(short, long)]
        plural: bool,
    },
    /// Decline every base-form word of a phrase
    Collocation {
        phrase: String,
        #[arg(short, long)]
        case: Case,
        #[command(flatten)]
        dictionary: DictionaryArgs,
        /// Decline every word without consulting a dictionary
        #[arg(long)]
        no_dictionary: bool,
    },
    /// Guess the sex of a person from their patronymic
    Sex { patronymic: String },
    /// Bring a declined full name back to the nominative
    Nominative { full_name: String },
    /// Load the dictionary, rebuilding the compiled cache if stale
    Compile {
        #[command(flatten)]
        dictionary: DictionaryArgs,
    },
}

#[derive(Args)]
struct PersonArgs {
    word: String,
    #[arg(short, long)]
    case: Case,
    #[arg(short, long, default_value = "male")]
    gender: Gender,
}

#[derive(Args)]
struct DictionaryArgs {
    /// Raw word list, one base form per line
    #[arg(short, long, value_name = "FILE", env = "SKLON_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Compiled dictionary (default: sklon-words.rkyv in the temp directory)
    #[arg(long, value_name = "FILE", env = "SKLON_CACHE")]
    cache: Option<PathBuf>,
}

impl DictionaryArgs {
    fn config(&self) -> Option<DictionaryConfig> {
        let source = self.dictionary.as_ref()?;
        let config = DictionaryConfig::new(source);
        Some(match &self.cache {
            Some(cache) => config.with_cache(cache),
            None => config,
        })
    }
}

/// One result line. `--json` prints it whole, otherwise only `output`.
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<Case>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    output: String,
}

impl Report {
    fn new(input: String, output: String) -> Self {
        Self {
            input,
            case: None,
            gender: None,
            output,
        }
    }

    fn case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let report = run(cli.command)?;
    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.output);
    }
    Ok(())
}

fn run(command: Command) -> Result<Report> {
    let report = match command {
        Command::Name(args) => {
            let output = decline_name(&args.word, args.gender, args.case);
            Report::new(args.word, output).case(args.case).gender(args.gender)
        }
        Command::Patronymic(args) => {
            let output = decline_patronymic(&args.word, args.gender, args.case);
            Report::new(args.word, output).case(args.case).gender(args.gender)
        }
        Command::Surname(args) => {
            let output = decline_surname(&args.word, args.gender, args.case);
            Report::new(args.word, output).case(args.case).gender(args.gender)
        }
        Command::Profession { title, case } => {
            let output = decline_profession(&title, case);
            Report::new(title, output).case(case)
        }
        Command::ProfessionBase { title } => {
            let output = profession_to_base(&title);
            Report::new(title, output)
        }
        Command::Word { word, case, plural } => {
            let output = if plural {
                decline_word_plural(&word, case)
            } else {
                decline_word(&word, case)
            };
            Report::new(word, output).case(case)
        }
        Command::Collocation {
            phrase,
            case,
            dictionary,
            no_dictionary,
        } => {
            let config = if no_dictionary { None } else { dictionary.config() };
            let output = match config {
                Some(config) => {
                    let source = config.source.clone();
                    let mut cache = DictionaryCache::new(config);
                    decline_collocation(&phrase, case, Some(&mut cache)).with_context(|| {
                        format!("failed to load dictionary {}", source.display())
                    })?
                }
                None => {
                    log::debug!("declining '{}' without a dictionary", phrase);
                    decline_collocation(&phrase, case, None)?
                }
            };
            Report::new(phrase, output).case(case)
        }
        Command::Sex { patronymic } => {
            let sex = infer_sex_from_patronymic(&patronymic);
            Report::new(patronymic, sex.to_string()).gender(sex)
        }
        Command::Nominative { full_name } => {
            let output = name_to_nominative(&full_name);
            Report::new(full_name, output)
        }
        Command::Compile { dictionary } => {
            let config = dictionary
                .config()
                .context("no dictionary given (use --dictionary or SKLON_DICTIONARY)")?;
            let source = config.source.clone();
            let mut cache = DictionaryCache::new(config);
            let outcome = cache
                .load()
                .with_context(|| format!("failed to load dictionary {}", source.display()))?;

            let verb = match outcome {
                LoadOutcome::AlreadyLoaded | LoadOutcome::Reused => "reused",
                LoadOutcome::Rebuilt => "rebuilt",
            };
            let output = format!(
                "{verb} {} ({} base forms, sha1 {})",
                cache.config().cache.display(),
                cache.len(),
                cache.fingerprint().unwrap_or("-")
            );
            Report::new(source.display().to_string(), output)
        }
    };

    Ok(report)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
