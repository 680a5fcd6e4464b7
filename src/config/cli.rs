use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-shop")]
#[command(about = "Browse the demo store and manage a local shopping cart")]
pub struct CliConfig {
    /// TOML 設定檔
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    #[arg(long, global = true, help = "Directory holding the device store")]
    pub data_dir: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 商品目錄
    #[command(subcommand)]
    Products(ProductsCommand),
    /// 購物車
    #[command(subcommand)]
    Cart(CartCommand),
    Login(LoginArgs),
    Logout,
    Register(RegisterArgs),
    /// 顯示目前是否已登入
    Whoami,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProductsCommand {
    List,
    Show { id: u64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    Show,
    Add {
        id: u64,
    },
    Set {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Remove {
        id: u64,
    },
    Clear,
}

#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}

impl CliConfig {
    /// 預設值 → `--config` 檔案 → 命令列參數，最後整體驗證
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.merge_file(&file);
        }

        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }
}
