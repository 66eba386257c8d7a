use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_env::game::GameConfig;
use snake_env::modes::{Policy, RolloutConfig, RolloutMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake-env")]
#[command(version, about = "Headless grid Snake simulation driven by scripted agents")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Number of episodes to run
    #[arg(long, default_value = "100")]
    episodes: u32,

    /// Step cap per episode
    #[arg(long, default_value = "1000")]
    max_steps: u32,

    /// Seed for food placement and the random policy
    #[arg(long)]
    seed: Option<u64>,

    /// Decision policy driving the environment
    #[arg(long, value_enum, default_value = "random")]
    policy: PolicyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Uniform random directions
    Random,
    /// Always head toward the food
    Greedy,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => Policy::Random,
            PolicyArg::Greedy => Policy::Greedy,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = RolloutConfig::new(cli.episodes);
    config.game_config = GameConfig::new(cli.width, cli.height);
    config.max_steps = cli.max_steps;
    config.seed = cli.seed;
    config.policy = cli.policy.into();

    RolloutMode::new(config)?.run()
}
