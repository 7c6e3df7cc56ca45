use clap::Parser;
use colored::*;
use passkeep::api::{CmdMessage, MessageLevel, PassKeepApi};
use passkeep::error::Result;
use passkeep::model::{Credential, GenerationOptions};
use passkeep::store::fs::FileStore;
use passkeep::strength::Strength;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(&cli.file);
    let mut api = PassKeepApi::new(store);

    match cli.command {
        Commands::Generate {
            length,
            no_lower,
            no_upper,
            no_digits,
            no_symbols,
            exclude_similar,
            exclude_ambiguous,
            save,
            email,
        } => {
            let options = GenerationOptions {
                length,
                lower: !no_lower,
                upper: !no_upper,
                digits: !no_digits,
                symbols: !no_symbols,
                exclude_similar,
                exclude_ambiguous,
            };
            handle_generate(&mut api, &options, save, email)
        }
        Commands::Score { password } => handle_score(&api, &password),
        Commands::Save {
            site,
            email,
            password,
        } => handle_save(&mut api, &site, &email, &password),
        Commands::Get { site } => handle_get(&api, &site),
        Commands::List => handle_list(&api),
        Commands::Delete { site } => handle_delete(&mut api, &site),
    }
}

fn handle_generate(
    api: &mut PassKeepApi<FileStore>,
    options: &GenerationOptions,
    save: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let result = api.generate(options)?;
    let password = result.password.unwrap_or_default();

    println!("{}", password);
    if let Some(strength) = result.strength {
        println!("Strength: {}", strength_colored(strength));
    }

    // clap's `requires` guarantees email accompanies save
    if let Some(site) = save {
        let result = api.save(&site, email.as_deref().unwrap_or_default(), &password)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_score(api: &PassKeepApi<FileStore>, password: &str) -> Result<()> {
    let result = api.score(password)?;
    if let Some(strength) = result.strength {
        println!("Strength: {}", strength_colored(strength));
    }
    Ok(())
}

fn handle_save(
    api: &mut PassKeepApi<FileStore>,
    site: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let result = api.save(site, email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(api: &PassKeepApi<FileStore>, site: &str) -> Result<()> {
    let result = api.get(site)?;
    for (site, credential) in &result.entries {
        print_entry(site, credential);
    }
    Ok(())
}

fn handle_list(api: &PassKeepApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    if result.entries.is_empty() {
        println!("No credentials stored.");
        return Ok(());
    }
    for (site, credential) in &result.entries {
        print_entry(site, credential);
    }
    Ok(())
}

fn handle_delete(api: &mut PassKeepApi<FileStore>, site: &str) -> Result<()> {
    let result = api.delete(site)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_entry(site: &str, credential: &Credential) {
    println!("{}", site.bold());
    println!("  Email:    {}", credential.email);
    println!("  Password: {}", credential.password);
}

fn strength_colored(strength: Strength) -> ColoredString {
    match strength {
        Strength::Strong => strength.label().green(),
        Strength::Medium => strength.label().yellow(),
        Strength::Weak => strength.label().red(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
