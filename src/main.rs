use anyhow::Result;
use clap::CommandFactory;
use clap::error::ErrorKind;
use paragraphize::cli::Cli;
use paragraphize::config::Config;
use paragraphize::constants::DEFAULT_LOG_FILTER;
use paragraphize::pipeline::Pipeline;
use paragraphize::{default_noise_config, default_paragraph_config};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_cli();
    init_tracing(config.verbose);

    if config.show_defaults {
        let p = default_paragraph_config();
        let n = default_noise_config();
        println!("min-sentences      {}", p.min_sentences);
        println!("max-sentences      {}", p.max_sentences);
        println!("min-words          {}", p.min_words);
        println!("max-words          {}", p.max_words);
        println!("line-breaks        {}", p.line_breaks);
        println!("sentence-variation {}", n.sentence_variation);
        println!("word-variation     {}", n.word_variation);
        return Ok(());
    }

    // Range checks are a usage error, same exit code as clap's own
    if let Err(e) = config.validate() {
        Cli::command().error(ErrorKind::ValueValidation, e).exit();
    }

    let show_stats = config.stats;
    let mut pipeline = Pipeline::new(config);
    pipeline.load_input()?;
    pipeline.format();
    if show_stats && let Some(cmp) = pipeline.comparison() {
        eprint!("{cmp}");
    }
    pipeline.emit()?;

    Ok(())
}
