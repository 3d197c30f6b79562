use clap::Parser;
use hero_tour::core::HeroTransport;
use hero_tour::utils::logger;
use hero_tour::{
    CliConfig, Command, Hero, HeroService, HeroesComponent, InMemoryTransport, MessageService,
    ReqwestTransport, TracingSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 合併並驗證設定
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(settings.verbose, settings.json_logs);

    tracing::info!("Starting hero-tour CLI");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 訊息紀錄由這個 session 持有，注入到 service
    let messages = MessageService::new();

    if cli.offline {
        tracing::info!("🔌 Offline mode: using the in-memory backend");
        let service = HeroService::new(InMemoryTransport::seeded(), TracingSink, messages.clone());
        run(&service, &cli.command).await;
    } else {
        let transport = ReqwestTransport::from_config(&settings.api)?;
        tracing::info!("🌐 Backend: {}", transport.collection_url());
        let service = HeroService::new(transport, TracingSink, messages.clone());
        run(&service, &cli.command).await;
    }

    println!();
    println!("Messages:");
    for message in messages.messages() {
        println!("  {}", message);
    }

    Ok(())
}

async fn run<T: HeroTransport>(service: &HeroService<T, TracingSink>, command: &Command) {
    match command {
        Command::List => {
            let mut component = HeroesComponent::new(service);
            component.init().await;
            print_heroes(component.heroes());
        }
        Command::Get { id, no_404 } => {
            let hero = if *no_404 {
                service.get_no_404(*id).await
            } else {
                service.get_by_id(*id).await
            };
            match hero {
                Some(hero) => print_hero(&hero),
                None => println!("No hero with id={}", id),
            }
        }
        Command::Add { name } => {
            let mut component = HeroesComponent::new(service);
            match component.add(name).await {
                Some(hero) => print_hero(hero),
                None => println!("Nothing added"),
            }
        }
        Command::Rename { id, name } => {
            let mut component = HeroesComponent::new(service);
            match component.rename(*id, name).await {
                Some(hero) => print_hero(&hero),
                None => println!("Nothing renamed"),
            }
        }
        Command::Delete { id } => {
            if service.remove(*id).await.is_some() {
                println!("Deleted hero id={}", id);
            }
        }
        Command::Search { term } => {
            print_heroes(&service.search(term).await);
        }
        Command::Select { id } => {
            let mut component = HeroesComponent::new(service);
            component.init().await;
            if let Some(hero) = component.heroes().iter().find(|h| h.id == *id).cloned() {
                component.select(hero);
            }
            match component.selected() {
                Some(hero) => {
                    println!("{} Details", hero.name.to_uppercase());
                    println!("  id: {}", hero.id);
                    println!("  name: {}", hero.name);
                }
                None => println!("No hero with id={} in the roster", id),
            }
        }
    }
}

fn print_heroes(heroes: &[Hero]) {
    if heroes.is_empty() {
        println!("(no heroes)");
    }
    for hero in heroes {
        print_hero(hero);
    }
}

fn print_hero(hero: &Hero) {
    println!("{:>4}  {}", hero.id, hero.name);
}

