use std::io::{self, Read, Write};
use std::path::PathBuf;

use gumdrop::Options;
use serde::Serialize;

use wordcheck::config::{Collation, EmptyLines, SpellcheckConfig};
use wordcheck::dictionary::Dictionary;
use wordcheck::distance::distance;
use wordcheck::speller::{render, ClassifiedToken, SpellChecker};
use wordcheck::subject::resolve_subject_text;
use wordcheck::tokenizer::Tokenize;
use wordcheck::vfs::Fs;
use wordcheck::SpellcheckError;

const BRIEF_DESCRIPTION: &str = "checks spelling of word or content";

const COMMANDS: &[&str] = &["check", "tokenize", "distance"];

trait OutputWriter<'a> {
    fn write_tokens(&mut self, tokens: &[ClassifiedToken<'a>]);
    fn finish(&mut self, out: &mut dyn Write) -> anyhow::Result<()>;
}

struct StdoutWriter {
    rendered: String,
}

impl<'a> OutputWriter<'a> for StdoutWriter {
    fn write_tokens(&mut self, tokens: &[ClassifiedToken<'a>]) {
        self.rendered = render(tokens.iter().copied());
    }

    fn finish(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        out.write_all(self.rendered.as_bytes())?;
        Ok(())
    }
}

#[derive(Default, Serialize)]
struct JsonWriter<'a> {
    results: Vec<ClassifiedToken<'a>>,
}

impl<'a> JsonWriter<'a> {
    pub fn new() -> JsonWriter<'a> {
        Self::default()
    }
}

impl<'a> OutputWriter<'a> for JsonWriter<'a> {
    fn write_tokens(&mut self, tokens: &[ClassifiedToken<'a>]) {
        self.results.extend_from_slice(tokens);
    }

    fn finish(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &*self)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(no_short, long = "brief-description", help = "print a one-line description")]
    brief_description: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "mark misspelled words in text or a file")]
    Check(CheckArgs),

    #[options(help = "print input in whitespace-tokenized form")]
    Tokenize(TokenizeArgs),

    #[options(help = "print the edit distance between two words")]
    Distance(DistanceArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to check against, one word per line")]
    dictionary: Option<PathBuf>,

    #[options(help = "JSON config file")]
    config: Option<PathBuf>,

    #[options(short = "i", long = "case-insensitive", help = "ignore ASCII case")]
    case_insensitive: bool,

    #[options(
        no_short,
        long = "reject-empty-lines",
        help = "fail on empty lines in the word list"
    )]
    reject_empty_lines: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to check, or the path of a file to check")]
    subject: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct DistanceArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(free, help = "the two words to compare")]
    words: Vec<String>,
}

fn load_config(args: &CheckArgs) -> Result<SpellcheckConfig, SpellcheckError> {
    // 1. defaults, 2. config file
    let mut config = match &args.config {
        Some(path) => SpellcheckConfig::load(&Fs, path)?,
        None => SpellcheckConfig::default(),
    };

    // 3. command line
    if let Some(path) = &args.dictionary {
        config.dictionary = Some(path.clone());
    }
    if args.case_insensitive {
        config.collation = Collation::AsciiCaseInsensitive;
    }
    if args.reject_empty_lines {
        config.empty_lines = EmptyLines::Reject;
    }

    Ok(config)
}

fn check(args: CheckArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    if args.subject.is_empty() {
        return Err(SpellcheckError::InvalidArguments("no subject supplied".into()).into());
    }

    let mut config = load_config(&args)?;
    let text = resolve_subject_text(&Fs, &args.subject.join(" "))?;

    let dictionary_path = config.dictionary_path();
    config.dictionary = Some(dictionary_path.clone());
    let dictionary = Dictionary::load(&Fs, &config)?;
    log::info!(
        "loaded {} words from {}",
        dictionary.len(),
        dictionary_path.display()
    );

    let tokens: Vec<ClassifiedToken<'_>> = SpellChecker::new(&dictionary).check(&text).collect();

    let mut writer: Box<dyn OutputWriter<'_> + '_> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter {
            rendered: String::new(),
        })
    };

    writer.write_tokens(&tokens);
    writer.finish(out)
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs: String = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.inputs.join(" ")
    };

    for (index, token) in inputs.token_indices() {
        println!("{:>4}: \"{}\"", index, token);
    }

    Ok(())
}

fn edit_distance(args: DistanceArgs) -> anyhow::Result<()> {
    match args.words.as_slice() {
        [a, b] => {
            println!("{}", distance(a, b));
            Ok(())
        }
        _ => Err(SpellcheckError::InvalidArguments(format!(
            "expected two words, got {}",
            args.words.len()
        ))
        .into()),
    }
}

/// `wordcheck some text` is short for `wordcheck check some text`.
fn parse_args(mut argv: Vec<String>) -> Result<Args, gumdrop::Error> {
    let bare_subject = argv
        .first()
        .map_or(false, |first| !first.starts_with('-') && !COMMANDS.contains(&first.as_str()));
    if bare_subject {
        argv.insert(0, "check".to_string());
    }

    Args::parse_args_default(&argv)
}

fn print_help(args: &Args) {
    match args.command_name() {
        Some(name) => {
            eprintln!("Usage: wordcheck {} [OPTIONS]", name);
            eprintln!();
            eprintln!("{}", Args::command_usage(name).unwrap_or_default());
        }
        None => {
            eprintln!("Usage: wordcheck [OPTIONS] [COMMAND | TEXT...]");
            eprintln!();
            eprintln!("{}", Args::usage());
            eprintln!();
            eprintln!("Available commands:");
            eprintln!("{}", Args::command_list().unwrap_or_default());
        }
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = match parse_args(std::env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("wordcheck: {}", e);
            std::process::exit(2);
        }
    };

    if args.help_requested() {
        print_help(&args);
        return Ok(());
    }

    if args.brief_description {
        println!("{}", BRIEF_DESCRIPTION);
        return Ok(());
    }

    match args.command {
        None => {
            eprintln!("{}", Args::usage());
            Err(SpellcheckError::InvalidArguments("no command supplied".into()).into())
        }
        Some(Command::Check(args)) => check(args, &mut io::stdout().lock()),
        Some(Command::Tokenize(args)) => tokenize(args),
        Some(Command::Distance(args)) => edit_distance(args),
    }
}
