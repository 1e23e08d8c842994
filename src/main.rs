use std::io::BufRead;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossbeam::channel::{self, Receiver, RecvTimeoutError};
use sortbench::algorithms::print_catalog;
use sortbench::logging::init_tracing;
use sortbench::report::{default_export_file_name, ranking};
use sortbench::{RunConfig, RunEvent, Selection, Session};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Benchmark textbook sorting algorithms over growing random inputs", long_about = None)]
struct Cli {
    /// Log driver progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available algorithms
    List,

    /// Run the experiments and print a summary
    Run {
        /// Algorithms to test (comma-separated names or short forms, e.g. quick,heap)
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Vec<String>,

        /// Test every algorithm in the catalog
        #[arg(long, conflicts_with = "algorithms")]
        all: bool,

        /// Comma-separated input sizes, ascending (default: the full ladder)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Trials averaged per algorithm and size
        #[arg(short, long, default_value = "5")]
        trials: usize,

        /// Seed for input generation
        #[arg(long)]
        seed: Option<u64>,

        /// Write the results as CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the results as CSV to sorting_results_<date>.csv
        #[arg(long, conflicts_with = "output")]
        export: bool,

        /// Do not read pause/stop commands from stdin
        #[arg(long)]
        no_input: bool,
    },
}

enum Command {
    TogglePause,
    Stop,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List => print_catalog(),
        Commands::Run {
            algorithms,
            all,
            sizes,
            trials,
            seed,
            output,
            export,
            no_input,
        } => {
            let selection = if all {
                Selection::all()
            } else {
                Selection::from_names(&algorithms)?
            };

            let mut config = RunConfig::default().with_trials(trials);
            if let Some(sizes) = sizes {
                config = config.with_sizes(sizes);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let output = match (output, export) {
                (Some(path), _) => Some(path),
                (None, true) => Some(PathBuf::from(default_export_file_name())),
                (None, false) => None,
            };

            run(Session::with_selection(config, selection), output, no_input)?;
        }
    }

    Ok(())
}

fn run(
    mut session: Session,
    output: Option<PathBuf>,
    no_input: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    session.start()?;

    println!("=== Sorting Algorithm Benchmark ===");
    if !no_input {
        println!("(type 'p' + Enter to pause/resume, 'q' + Enter to stop)");
    }
    println!();

    let mut commands = if no_input {
        channel::never()
    } else {
        spawn_command_reader()
    };

    loop {
        if let Some(event) = session.try_next_event() {
            print_event(&event);
            continue;
        }
        if session.control().is_none() {
            break;
        }

        match commands.recv_timeout(POLL_INTERVAL) {
            Ok(Command::TogglePause) => {
                if let Ok(paused) = session.toggle_pause() {
                    println!("{}", if paused { "Paused" } else { "Resumed" });
                }
            }
            Ok(Command::Stop) => {
                if session.stop().is_ok() {
                    println!("Stopping after the current sort...");
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => commands = channel::never(),
        }
    }

    println!("\n{}", session.state().current_label);
    println!("\n{}", session.summary());

    if let Some(path) = output {
        session.write_csv(&path)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}

fn print_event(event: &RunEvent) {
    match event {
        RunEvent::Status(label) => println!("  {}", label),
        RunEvent::Record { record, progress } => {
            let ranked: Vec<String> = ranking(record)
                .iter()
                .map(|(name, ms)| format!("{} {:.3} ms", name, ms))
                .collect();
            println!("[{:>5.1}%] n={}: {}", progress, record.size, ranked.join(", "));
        }
        RunEvent::Finished(_) => {}
    }
}

// Reads pause/stop commands until stdin closes
fn spawn_command_reader() -> Receiver<Command> {
    let (sender, receiver) = channel::unbounded();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let command = match line.trim() {
                "p" | "pause" | "resume" => Command::TogglePause,
                "q" | "quit" | "stop" => Command::Stop,
                _ => continue,
            };
            if sender.send(command).is_err() {
                break;
            }
        }
    });
    receiver
}
