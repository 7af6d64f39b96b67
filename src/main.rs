use anyhow::Result;
use std::env;
use std::io;

// Use library instead of local modules
use user_registry::{run_shell, InvalidBalanceError, User, UserRegistry};

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            // Reference behavior: report the startup failure and still exit 0
            eprintln!("Ошибка: {}", e);
            return Ok(());
        }
    };

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "export" {
        // Export mode: dump the sorted registry as JSON
        run_export(&registry)?;
    } else {
        // Interactive mode (default)
        run_interactive(&registry)?;
    }

    Ok(())
}

/// Seed the fixed registry and sort it VIP-first.
fn build_registry() -> Result<UserRegistry, InvalidBalanceError> {
    let mut registry = UserRegistry::new();

    registry.register(User::new(1, "Анна", 1200.0)?);
    registry.register(User::new(2, "Иван", 800.0)?);
    registry.register(User::new_vip(3, "Мария", 5000.0, 0.05)?);
    registry.register(User::new_vip(4, "Петр", 3000.0, 0.1)?);

    registry.sort_by_status();
    log::info!("registry seeded with {} users", registry.count());

    Ok(registry)
}

fn run_interactive(registry: &UserRegistry) -> Result<()> {
    println!("Пользователи после сортировки по статусу (VIP -> обычные):");
    for user in registry.all_users() {
        println!("{}", user);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(registry, stdin.lock(), &mut stdout)
}

fn run_export(registry: &UserRegistry) -> Result<()> {
    println!("{}", registry.to_json()?);
    Ok(())
}
