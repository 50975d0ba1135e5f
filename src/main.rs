//! handbook CLI - render fixture handbook sections to HTML

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fixture_handbook::{
    parse_with_options, render_document, table_of_contents, AnchorStyle, Document, HeadingLevel,
    HtmlWriter, Options, Registry,
};

#[derive(Parser)]
#[command(name = "handbook")]
#[command(version, about = "Render the fixture design handbook", long_about = None)]
#[command(after_help = "EXAMPLES:
    handbook list                     List sections
    handbook section cnc-basics       Render one section as HTML
    handbook section intro --toc      Print the table of contents
    handbook render notes.txt         Render a content file")]
struct Cli {
    /// Section registry JSON (defaults to the built-in handbook)
    #[arg(long, global = true, env = "HANDBOOK_REGISTRY", value_name = "FILE")]
    registry: Option<PathBuf>,

    /// How heading anchors treat non-ASCII letters
    #[arg(long, global = true, value_enum, default_value_t = AnchorArg::Transliterate)]
    anchor_style: AnchorArg,

    /// Leave `$` markers as plain text
    #[arg(long, global = true)]
    no_math: bool,

    /// Print JSON instead of HTML
    #[arg(long, global = true)]
    json: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a content file, or stdin when FILE is `-` or missing
    Render {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Render a registry section
    Section {
        /// Section id (see `handbook list`)
        id: String,
        /// Print the table of contents instead of the content
        #[arg(long)]
        toc: bool,
    },
    /// List section ids and titles in menu order
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    Literal,
    Transliterate,
}

impl From<AnchorArg> for AnchorStyle {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Literal => AnchorStyle::Literal,
            AnchorArg::Transliterate => AnchorStyle::Transliterate,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut stdout = io::stdout().lock();
    run(&cli, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let options = Options {
        anchor_style: cli.anchor_style.into(),
        math: !cli.no_math,
    };

    match &cli.command {
        Command::Render { file } => {
            let input = read_input(file.as_ref())?;
            let doc = parse_with_options(&input, &options);
            write_document(out, &doc, cli.json)?;
        }
        Command::Section { id, toc } => {
            let registry = load_registry(cli.registry.as_ref())?;
            let doc = registry.render_section(id, &options);
            if *toc {
                write_toc(out, &doc, cli.json)?;
            } else {
                write_document(out, &doc, cli.json)?;
            }
        }
        Command::List => {
            let registry = load_registry(cli.registry.as_ref())?;
            if cli.json {
                serde_json::to_writer_pretty(&mut *out, registry.sections())?;
                writeln!(out)?;
            } else {
                write_menu(out, &registry)?;
            }
        }
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn load_registry(path: Option<&PathBuf>) -> Result<Registry> {
    match path {
        Some(path) => Registry::load(path)
            .with_context(|| format!("failed to load registry {}", path.display())),
        None => {
            debug!("using built-in registry");
            Ok(Registry::builtin())
        }
    }
}

fn write_menu(out: &mut impl Write, registry: &Registry) -> Result<()> {
    if !registry.title().is_empty() {
        writeln!(out, "{}", registry.title())?;
    }
    if !registry.subtitle().is_empty() {
        writeln!(out, "{}", registry.subtitle())?;
    }
    writeln!(out)?;
    for section in registry.sections() {
        writeln!(out, "{}\t{}", section.id, section.title)?;
    }
    Ok(())
}

fn write_document(out: &mut impl Write, doc: &Document, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, doc.blocks())?;
        writeln!(out)?;
    } else {
        let mut writer = HtmlWriter::new();
        render_document(doc, &mut writer);
        out.write_all(writer.as_str().as_bytes())?;
    }
    Ok(())
}

fn write_toc(out: &mut impl Write, doc: &Document, json: bool) -> Result<()> {
    let entries = table_of_contents(doc);
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in entries {
            let indent = match entry.level {
                HeadingLevel::H2 => "",
                HeadingLevel::H3 => "  ",
            };
            writeln!(out, "{indent}{} (#{})", entry.title, entry.anchor)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use fixture_handbook::registry::DEFAULT_FALLBACK;
    use tempfile::NamedTempFile;

    use super::*;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("handbook").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::<u8>::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("## Giriş\n\n* A\n* B".as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();

        let html = run_args(&["render", path]);
        assert_eq!(
            html,
            "<h2 id=\"giris\">Giriş</h2>\n<ul class=\"list\">\n<li>A</li>\n<li>B</li>\n</ul>\n"
        );

        let html = run_args(&["--anchor-style", "literal", "--no-math", "render", path]);
        assert!(html.starts_with("<h2 id=\"giri\">"), "Got: {html}");
    }

    #[test]
    fn test_render_missing_file_fails() {
        let cli = Cli::try_parse_from(["handbook", "render", "/yok/dosya.txt"]).unwrap();
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "Got: {err}");
    }

    #[test]
    fn test_section_unknown_id_prints_fallback() {
        let html = run_args(&["section", "yok"]);
        assert_eq!(html, format!("<p>{DEFAULT_FALLBACK}</p>\n"));
    }

    #[test]
    fn test_section_toc() {
        let toc = run_args(&["section", "intro", "--toc"]);
        let lines: Vec<_> = toc.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("(#giris-uretim-muhendisliginde-fiksturun-yeri)"));
    }

    #[test]
    fn test_section_toc_json() {
        let json = run_args(&["--json", "section", "intro", "--toc"]);
        let entries: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 4);
        assert_eq!(entries[0]["level"], "H2");
    }

    #[test]
    fn test_list_prints_header_and_sections() {
        let menu = run_args(&["list"]);
        let mut lines = menu.lines();
        assert_eq!(lines.next(), Some("Tasarım Elkitabı"));
        assert_eq!(lines.next(), Some("Üretim Mühendisliği En İyi Uygulamaları"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("intro\tGiriş"));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn test_list_json() {
        let json = run_args(&["--json", "list"]);
        let sections: Vec<fixture_handbook::Section> = serde_json::from_str(&json).unwrap();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].id, "intro");
    }

    #[test]
    fn test_custom_registry_flag() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"sections": [{"id": "s", "title": "S", "content": "$x$"}]}"#)
            .unwrap();
        let path = file.path().to_str().unwrap();

        let html = run_args(&["--registry", path, "section", "s"]);
        assert_eq!(html, "<p><span class=\"math-inline\">x</span></p>\n");
    }
}
