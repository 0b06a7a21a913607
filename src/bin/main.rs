use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use lexicon_core::persistence::{load_snapshot, save_snapshot};
use lexicon_core::{
    Dictionary, DisplayRecord, Entry, Flavorisation, Lang, SearchRequest, SearchType, HEADER,
};
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexicon_search", about = "Search-as-you-type over an Interslavic dictionary")]
struct Cli {
    /// Tab-separated word list whose first row names the columns
    words: PathBuf,

    /// Rehydrate the index from a snapshot instead of tokenizing
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write the built index to this snapshot file
    #[arg(long)]
    write_snapshot: Option<PathBuf>,

    #[arg(long, default_value = "isv")]
    from: String,

    #[arg(long, default_value = "en")]
    to: String,

    #[arg(long, default_value = "begin")]
    search_type: String,

    #[arg(long, default_value = "3")]
    flavorisation: String,
}

/// Session settings the user can change from the prompt.
struct Session {
    from: Lang,
    to: Lang,
    search_type: SearchType,
    flavorisation: Flavorisation,
    query: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexicon_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let words = read_word_list(&cli.words)?;
    let snapshot = cli.snapshot.as_deref().map(load_snapshot).transpose()?;

    let mut dictionary = Dictionary::new();
    dictionary.build(words, snapshot)?;
    if let Some(path) = &cli.write_snapshot {
        save_snapshot(&dictionary.snapshot()?, path)?;
    }

    let mut session = Session {
        from: cli.from.parse()?,
        to: cli.to.parse()?,
        search_type: cli.search_type.parse()?,
        flavorisation: cli.flavorisation.parse()?,
        query: String::new(),
    };
    let mut notice = String::new();

    loop {
        let request = SearchRequest::new(session.query.as_str(), session.from, session.to)
            .with_search_type(session.search_type)
            .with_flavorisation(session.flavorisation);
        let records = dictionary.translate(&request)?;
        print_ui(&session, &records, &notice)?;
        notice.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd.split_once(' ') {
            _ if cmd == "exit" => break,
            _ if cmd == ":stats" => {
                let stats = dictionary.completion_statistics()?;
                notice = stats
                    .iter()
                    .map(|(lang, percent)| format!("{}: {}%", lang, percent))
                    .collect::<Vec<_>>()
                    .join("  ");
            }
            Some((":from", lang)) => match lang.parse() {
                Ok(lang) => session.from = lang,
                Err(e) => notice = e.to_string(),
            },
            Some((":to", lang)) => match lang.parse() {
                Ok(lang) => session.to = lang,
                Err(e) => notice = e.to_string(),
            },
            Some((":type", kind)) => match kind.parse() {
                Ok(kind) => session.search_type = kind,
                Err(e) => notice = e.to_string(),
            },
            Some((":flavour", code)) => match code.parse() {
                Ok(style) => session.flavorisation = style,
                Err(e) => notice = e.to_string(),
            },
            Some((":fold", letters)) => {
                let active: Vec<String> = dictionary
                    .toggle_folding_letter(letters)
                    .pairs()
                    .iter()
                    .map(|(from, to)| format!("{}→{}", from, to))
                    .collect();
                notice = format!("distinguished letters: {}", active.join(" "));
            }
            _ => session.query = cmd.to_string(),
        }
    }
    Ok(())
}

/// Reads a tab-separated word list, reordering columns into [`HEADER`] order.
fn read_word_list(path: &Path) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();
    let columns: Vec<&str> = lines.next().unwrap_or_default().split('\t').collect();
    let positions: Vec<Option<usize>> = HEADER
        .iter()
        .map(|name| columns.iter().position(|column| column.trim() == *name))
        .collect();

    let words = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let cells: Vec<&str> = line.split('\t').collect();
            let fields = positions
                .iter()
                .map(|position| {
                    position
                        .and_then(|i| cells.get(i))
                        .map(|cell| cell.to_string())
                        .unwrap_or_default()
                })
                .collect();
            Entry::new(fields)
        })
        .collect();
    Ok(words)
}

fn print_ui(session: &Session, records: &[DisplayRecord], notice: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Interslavic dictionary".bold());
    println!("---------------------------------------------------------------");
    println!("Type a query (options: -end -etym -b -p <pos>) and press [Enter].");
    println!(":from xx  :to xx  :type begin|full|end|some  :flavour 2|3|S|J");
    println!(":fold <letters>  :stats  exit\n");
    println!(
        "{} {} → {}  ({:?}, {:?})",
        "Direction:".dark_grey(),
        session.from,
        session.to,
        session.search_type,
        session.flavorisation
    );
    if !notice.is_empty() {
        println!("{}", notice.yellow());
    }

    println!("\nQuery: [{}]", session.query);
    if records.is_empty() {
        println!("\nNo results.");
    } else {
        println!();
        for (i, record) in records.iter().enumerate() {
            let mark = if record.checked { " " } else { "!" };
            println!(
                "{:>3}.{} {} / {} / {}  {}  [{}]  {}",
                i + 1,
                mark,
                record.original.as_str().bold(),
                record.original_cyr,
                record.original_gla,
                record.details.as_str().dark_grey(),
                record.ipa,
                record.translate
            );
        }
    }
    print!("\n> ");
    out.flush()
}
