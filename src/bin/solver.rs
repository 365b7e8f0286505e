use clap::Parser;
use statespace::problems::{Board, GraphProblem, ProblemDefinition, SlidingPuzzle};
use statespace::search::{
    plan_cost, search_engines::SearchEngineName, search_engines::SearchResult, validate, Heuristic,
    Problem, SearchConfig, Verbosity,
};
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version, allow_negative_numbers = true)]
/// Solve a state-space search problem described in a TOML file.
struct Cli {
    #[arg(help = "The problem file, a graph or a sliding puzzle")]
    problem: PathBuf,
    #[arg(
        help = "A search config file, the options below override its values",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: breadth-first]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The bound of depth-limited search",
        short = 'b',
        long = "bound",
        id = "BOUND"
    )]
    bound: Option<i64>,
    #[arg(
        help = "The first bound of iterative deepening",
        long = "initial-bound"
    )]
    initial_bound: Option<i64>,
    #[arg(
        help = "Iterative deepening stops before this bound",
        long = "final-bound"
    )]
    final_bound: Option<i64>,
    #[arg(
        help = "Log every node as it is taken from the frontier",
        long = "trace"
    )]
    trace: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path)?,
            None => SearchConfig::default(),
        };
        if let Some(engine) = self.search_engine_name {
            config.engine = engine;
        }
        if self.bound.is_some() {
            config.bound = self.bound;
        }
        if let Some(initial_bound) = self.initial_bound {
            config.initial_bound = initial_bound;
        }
        if self.final_bound.is_some() {
            config.final_bound = self.final_bound;
        }
        config.verbose |= self.trace;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.verbosity.env_filter())
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.search_config()?;
    info!(engine = %config.engine, problem = %cli.problem.display());

    match ProblemDefinition::from_path(&cli.problem)? {
        ProblemDefinition::Graph(definition) => {
            let problem = GraphProblem::new(definition)?;
            let heuristic: Box<dyn Heuristic<String>> = Box::new(problem.heuristic());
            solve(&problem, heuristic, &config)
        }
        ProblemDefinition::SlidingPuzzle(definition) => {
            let problem = SlidingPuzzle::new(definition)?;
            if !problem.is_solvable() {
                warn!("the goal cannot be reached from this board");
            }
            let heuristic: Box<dyn Heuristic<Board>> = Box::new(problem.manhattan_distance());
            solve(&problem, heuristic, &config)
        }
    }
}

fn solve<P>(
    problem: &P,
    heuristic: Box<dyn Heuristic<P::State>>,
    config: &SearchConfig,
) -> Result<(), Box<dyn Error>>
where
    P: Problem + 'static,
{
    let mut engine = config.engine.create::<P>(config, Some(heuristic))?;
    let (result, statistics) = engine.search(problem);

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            validate(&plan, problem)?;
            info!("plan is valid");
            let cost = plan_cost(&plan, problem)?;
            info!(plan_length = plan.len(), plan_cost = cost);

            println!("Plan found:");
            if !plan.is_empty() {
                println!("{}", plan);
            }
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);
        }
        SearchResult::NoSolution => {
            info!(
                expanded_nodes = statistics.get_expanded_nodes(),
                "no plan found"
            );
            println!("No plan found");
        }
    }
    Ok(())
}
