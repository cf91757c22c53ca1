//! Follow Graph Interactive Driver
//!
//! Menu-driven REPL over the follow-graph engine. The graph is restored
//! from the snapshot file at startup and saved back on quit.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: warn)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin follow_graph_repl
//! ```

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use follow_graph::{
    load_connections, load_graph, load_users, save_graph, AllPathsOutcome, FollowGraph,
    PathOutcome, UserOrdering, SNAPSHOT_FILE,
};

const MENU: &str = "(U) Add User
(C) Add Connection
(AU) Load all Users
(AC) Load all Connections
(P) Print all Users
(L) Print all Loops (cycles)
(RU) Remove User
(RC) Remove Connection
(SP) Find Shortest Path
(AP) Find All Paths
(Q) Quit";

const SORT_MENU: &str = "(SA) Sort Users by Name
(SB) Sort Users by Number of Followers
(SC) Sort Users by Number of Following
(Q) Quit // back to main menu";

/// Initialize the tracing subscriber from `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "follow_graph=warn".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_users(graph: &FollowGraph, ordering: UserOrdering) {
    println!(
        "{:<30}{:<24}{}",
        "User Name", "Number of Followers", "Number of Following"
    );
    for user in graph.users_sorted(ordering) {
        println!(
            "{:<30}{:<24}{}",
            user.name(),
            graph.count_followers(user.index()),
            graph.count_following(user.index())
        );
    }
}

fn print_users_menu(graph: &FollowGraph, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        println!("\n{SORT_MENU}");
        let selection = prompt(input, "Enter a selection: ")?.to_uppercase();
        match selection.as_str() {
            "SA" => {
                println!("\nUsers:");
                print_users(graph, UserOrdering::ByName);
            }
            "SB" => {
                println!("\nUsers:");
                print_users(graph, UserOrdering::ByFollowers);
            }
            "SC" => {
                println!("\nUsers:");
                print_users(graph, UserOrdering::ByFollowing);
            }
            "Q" => return Ok(()),
            _ => println!("Invalid selection."),
        }
    }
}

fn print_loops(graph: &FollowGraph) {
    let mut loops = graph.find_all_loops();
    loops.sort();
    match loops.len() {
        0 => println!("There are no loops."),
        1 => println!("There is 1 loop:"),
        n => println!("There are a total of {n} loops:"),
    }
    for cycle in loops {
        println!("{cycle}");
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let mut graph = load_graph(SNAPSHOT_FILE);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{MENU}");
    loop {
        let selection = prompt(&mut input, "Enter a selection: ")?.to_uppercase();
        match selection.as_str() {
            "U" => {
                let name = prompt(&mut input, "Please enter the name of the user: ")?;
                if let Err(err) = graph.add_user(&name) {
                    println!("{err}");
                }
            }
            "C" => {
                let from = prompt(&mut input, "Please enter the source of the connection to add: ")?;
                let to = prompt(&mut input, "Please enter the dest of the connection to add: ")?;
                graph.add_connection(&from, &to);
            }
            "AU" => {
                let file = prompt(&mut input, "Enter the file name: ")?;
                match load_users(&mut graph, &file) {
                    Ok(added) => println!("{added} users added."),
                    Err(err) => println!("Error: {err}"),
                }
            }
            "AC" => {
                let file = prompt(&mut input, "Enter the file name: ")?;
                match load_connections(&mut graph, &file) {
                    Ok(applied) => println!("{applied} connections added."),
                    Err(err) => println!("Error: {err}"),
                }
            }
            "P" => print_users_menu(&graph, &mut input)?,
            "L" => print_loops(&graph),
            "RU" => {
                let name = prompt(&mut input, "Please enter the user to remove: ")?;
                graph.remove_user(&name);
            }
            "RC" => {
                let from =
                    prompt(&mut input, "Please enter the source of the connection to remove: ")?;
                let to = prompt(&mut input, "Please enter the dest of the connection to remove: ")?;
                graph.remove_connection(&from, &to);
            }
            "SP" => {
                let from = prompt(&mut input, "Please enter the desired source: ")?;
                let to = prompt(&mut input, "Please enter the desired destination: ")?;
                let outcome = graph.shortest_path(&from, &to);
                println!("{outcome}");
                if let PathOutcome::Found(names) = &outcome {
                    println!("The number of users in this path is: {}", names.len());
                }
            }
            "AP" => {
                let from = prompt(&mut input, "Please enter the desired source: ")?;
                let to = prompt(&mut input, "Please enter the desired destination: ")?;
                match graph.all_paths(&from, &to) {
                    AllPathsOutcome::Found(paths) => {
                        println!("There are a total of {} paths:", paths.len());
                        for path in paths {
                            println!("{path}");
                        }
                    }
                    other => println!("{other}"),
                }
            }
            "Q" => break,
            _ => println!("Invalid selection."),
        }
    }

    if let Err(err) = save_graph(&graph, SNAPSHOT_FILE) {
        eprintln!("Error saving the graph: {err}");
    } else {
        println!("Graph saved to {SNAPSHOT_FILE}.");
    }
    Ok(())
}
