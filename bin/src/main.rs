use clap::{Parser, Subcommand};
use nodeadmin_admin::{AdminClient, RpcError};
use nodeadmin_rpc::{EndpointRequester, HttpRequesterConfig};

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Start profiling the node's CPU usage
    StartCpuProfiler,
    /// Stop the CPU profiler and write the profile
    StopCpuProfiler,
    /// Write a heap profile
    MemoryProfile,
    /// Write a mutex profile
    LockProfile,
    /// Write the stack traces of every thread
    Stacktrace,
    /// Give an API endpoint an extra name
    Alias { endpoint: String, alias: String },
    /// Give a chain an extra name
    AliasChain { chain: String, alias: String },
    /// List every alias of a chain
    GetChainAliases { chain: String },
}

/// Call the admin API of a running node
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address of the node
    #[arg(env, short, long, default_value = "http://127.0.0.1:9650")]
    uri: String,

    /// Request timeout
    #[arg(env, long, default_value_t = 10000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

async fn run<R: EndpointRequester>(client: &AdminClient<R>, command: Command) -> Result<String, RpcError> {
    let success = match command {
        Command::StartCpuProfiler => client.start_cpu_profiler().await?,
        Command::StopCpuProfiler => client.stop_cpu_profiler().await?,
        Command::MemoryProfile => client.memory_profile().await?,
        Command::LockProfile => client.lock_profile().await?,
        Command::Stacktrace => client.stacktrace().await?,
        Command::Alias { endpoint, alias } => client.alias(&endpoint, &alias).await?,
        Command::AliasChain { chain, alias } => client.alias_chain(&chain, &alias).await?,
        Command::GetChainAliases { chain } => {
            let reply = client.get_aliases_of_chain(&chain).await?;
            return serde_json::to_string_pretty(&reply.aliases).map_err(RpcError::from);
        }
    };
    Ok(format!("success: {success}"))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    env_logger::builder().format_timestamp_millis().init();

    let client = match AdminClient::with_config(HttpRequesterConfig {
        uri: args.uri,
        timeout_ms: Some(args.timeout_ms),
        ..Default::default()
    }) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Create admin client error: {err}");
            std::process::exit(1);
        }
    };

    log::debug!("Run command {:?}", args.command);
    match run(&client, args.command).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("Command failed: {err}");
            std::process::exit(1);
        }
    }
}
