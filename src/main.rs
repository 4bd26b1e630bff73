use std::io;

use clap::Parser as ClapParser;
use kaleidoscope::{
    cli::Cli,
    driver::{dump_tokens, Driver},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let (source, file) = match cli.open_source() {
        Ok(opened) => opened,
        Err(error) => {
            eprintln!(
                "Error: Could not read file '{}': {}",
                cli.file.as_deref().unwrap_or("-"),
                error
            );
            std::process::exit(1);
        }
    };

    if cli.tokens {
        let mut lexer = Lexer::new(source, file);
        dump_tokens(&mut lexer, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut driver = Driver::new(Parser::new(source, file), io::stderr())
        .with_prompt(cli.prompt())
        .with_print_ast(cli.print_ast);
    driver.main_loop()?;

    Ok(())
}
