use clap::Parser;
use small_shop::config::cli::{CartCommand, Command, LoginArgs, ProductsCommand, RegisterArgs};
use small_shop::core::ConfigProvider;
use small_shop::domain::model::{Credentials, Registration};
use small_shop::utils::error::ErrorSeverity;
use small_shop::utils::logger;
use small_shop::{CartSummary, CliConfig, FileStore, Shop, StoreApiClient, StorefrontError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let storage = FileStore::new(settings.data_dir());
    let catalog = StoreApiClient::from_config(&settings)?;
    let shop = Shop::new(catalog, storage);

    if let Err(e) = run(&shop, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

async fn run(shop: &Shop<StoreApiClient, FileStore>, command: Command) -> small_shop::Result<()> {
    match command {
        Command::Products(ProductsCommand::List) => {
            for product in shop.products().await? {
                println!("{:>4}  ${:>8.2}  {}", product.id, product.price, product.title);
            }
        }
        Command::Products(ProductsCommand::Show { id }) => {
            let product = shop.product(id).await?;
            println!("{} (#{})", product.title, product.id);
            println!("Price:    ${:.2}", product.price);
            println!("Category: {}", product.category);
            if let Some(rating) = &product.rating {
                println!("Rating:   {:.1} ({} reviews)", rating.rate, rating.count);
            }
            println!("Image:    {}", product.image);
            if !product.description.is_empty() {
                println!();
                println!("{}", product.description);
            }
        }
        Command::Cart(CartCommand::Show) => print_cart(&shop.cart_summary().await),
        Command::Cart(CartCommand::Add { id }) => {
            let item = shop.add_to_cart(id).await?;
            println!("✅ {} added to cart (quantity {})", item.title, item.quantity);
        }
        Command::Cart(CartCommand::Set { id, quantity }) => {
            shop.cart().set_quantity(id, quantity).await?;
            print_cart(&shop.cart_summary().await);
        }
        Command::Cart(CartCommand::Remove { id }) => {
            shop.cart().remove(id).await?;
            print_cart(&shop.cart_summary().await);
        }
        Command::Cart(CartCommand::Clear) => {
            shop.cart().clear().await?;
            println!("🧹 Cart cleared");
        }
        Command::Login(LoginArgs {
            username,
            password,
            remember_me,
        }) => {
            let credentials = Credentials { username, password };
            shop.sign_in(&credentials, remember_me).await?;
            println!("✅ Signed in as {}", credentials.username);
            if !remember_me {
                println!("Session will not be remembered on this device");
            }
        }
        Command::Logout => {
            shop.sign_out().await?;
            println!("👋 Signed out");
        }
        Command::Register(RegisterArgs {
            username,
            email,
            phone,
            password,
            confirm_password,
        }) => {
            let registration = Registration {
                username,
                email,
                phone,
                password,
                confirm_password,
            };
            let user = shop.register(&registration).await?;
            println!("✅ Account created (id {})", user.id);
        }
        Command::Whoami => {
            if shop.session().is_signed_in().await {
                println!("Signed in");
            } else {
                println!("Not signed in");
            }
        }
    }
    Ok(())
}

fn print_cart(summary: &CartSummary) {
    if summary.items.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for item in &summary.items {
        let line_total = item
            .line_total()
            .map(|t| format!("{:.2}", t))
            .unwrap_or_else(|| "overflow".to_string());
        println!(
            "{:>4}  {:>3} × ${:>8.2}  = ${:>9}  {}",
            item.id, item.quantity, item.price, line_total, item.title
        );
    }
    println!("Items: {}", summary.count);
    match summary.total {
        Some(total) => println!("Total: ${:.2}", total),
        None => {
            tracing::warn!("Cart total exceeds the representable range");
            println!("Total: too large to display");
        }
    }
}

fn exit_with(e: &StorefrontError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
