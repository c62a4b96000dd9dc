// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Aislemap CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations), or
//! `--print` to write a single map frame to stdout.

use std::error::Error;
use std::sync::Arc;

use aislemap::map::{render_still, DRAW_IN_FRAMES};
use aislemap::model::Store;
use aislemap::query::submit;
use aislemap::render::{MapStyle, TEXT_COLS_RANGE, TEXT_ROWS_RANGE};
use aislemap::route::{build_path, build_steps, total_distance_meters};
use aislemap::sim::PositionSimulator;
use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tokio::sync::Mutex;

const DEFAULT_MCP_HTTP_PORT: u16 = 27436;
const DEFAULT_PRINT_SIZE: (usize, usize) = (100, 30);

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--find <query>] [--direct] [--minimal] [--seed <n>] [--mcp-http-port <port>]\n  {program} --print [--find <query>] [--direct] [--minimal] [--seed <n>] [--walk <n>] [--frame <n>] [--size <cols>x<rows>]\n  {program} --mcp [--direct] [--minimal]\n\nTUI mode (default) serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\n--find locates a product by ID (P001) or name on startup.\n--direct routes straight to the section instead of via the entrance.\n--minimal hides arrowheads and the directions panel (implies --direct).\n--seed makes the simulated position walk reproducible.\n\n--print renders one frame as text and exits; --walk advances the simulated position first,\n--frame picks the animation frame (default {DRAW_IN_FRAMES}), --size the text grid (default 100x30, from 20x8 up to 400x200).\n\nLogging goes to stderr and follows RUST_LOG (TUI mode logs nothing unless RUST_LOG is set)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    print: bool,
    find: Option<String>,
    direct: bool,
    minimal: bool,
    seed: Option<u64>,
    walk: Option<u32>,
    frame: Option<u32>,
    size: Option<(usize, usize)>,
    mcp_http_port: Option<u16>,
}

fn parse_size(raw: &str) -> Option<(usize, usize)> {
    let (cols, rows) = raw.split_once(['x', 'X'])?;
    let cols = cols.parse::<usize>().ok()?;
    let rows = rows.parse::<usize>().ok()?;
    (TEXT_COLS_RANGE.contains(&cols) && TEXT_ROWS_RANGE.contains(&rows)).then_some((cols, rows))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--direct" => {
                if options.direct {
                    return Err(());
                }
                options.direct = true;
            }
            "--minimal" => {
                if options.minimal {
                    return Err(());
                }
                options.minimal = true;
            }
            "--find" => {
                if options.find.is_some() {
                    return Err(());
                }
                let query = args.next().ok_or(())?;
                options.find = Some(query);
            }
            "--seed" => {
                if options.seed.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.seed = Some(raw.parse().map_err(|_| ())?);
            }
            "--walk" => {
                if options.walk.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.walk = Some(raw.parse().map_err(|_| ())?);
            }
            "--frame" => {
                if options.frame.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.frame = Some(raw.parse().map_err(|_| ())?);
            }
            "--size" => {
                if options.size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.size = Some(parse_size(&raw).ok_or(())?);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ => return Err(()),
        }
    }

    if options.mcp && (options.print || options.mcp_http_port.is_some() || options.find.is_some())
    {
        return Err(());
    }

    if options.print && options.mcp_http_port.is_some() {
        return Err(());
    }

    let print_only = options.walk.is_some() || options.frame.is_some() || options.size.is_some();
    if print_only && !options.print {
        return Err(());
    }

    Ok(options)
}

fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn map_style(options: &CliOptions) -> Result<MapStyle, Box<dyn Error>> {
    let mut style = if options.minimal {
        MapStyle::minimal()
    } else {
        MapStyle::from_env()?
    };
    if options.direct {
        style.via_entrance = false;
    }
    Ok(style)
}

fn print_frame(options: &CliOptions, style: &MapStyle) -> Result<(), Box<dyn Error>> {
    let store = Store::builtin();
    let product = options
        .find
        .as_deref()
        .map(|query| submit(store, query))
        .transpose()?;

    let mut simulator = PositionSimulator::from_seed(options.seed);
    for _ in 0..options.walk.unwrap_or(0) {
        simulator.step();
    }
    let location = simulator.location();

    let (cols, rows) = options.size.unwrap_or(DEFAULT_PRINT_SIZE);
    let text = render_still(
        store,
        style,
        location,
        product.map(|product| product.id().clone()),
        options.frame.unwrap_or(DRAW_IN_FRAMES),
        cols,
        rows,
    )?;
    println!("{text}");

    if let Some(product) = product {
        let path = build_path(store, location, product, style.route_options());
        let steps = build_steps(&path, product);
        println!();
        println!(
            "{} {} · Aisle {} · {} · {}m",
            product.id(),
            product.name(),
            product.location().aisle(),
            product.price(),
            total_distance_meters(&steps)
        );
        for step in &steps {
            match step.location.as_deref() {
                Some(location) => {
                    println!("  {} {} ({location})", step.direction.arrow(), step.instruction)
                }
                None => println!("  {} {}", step.direction.arrow(), step.instruction),
            }
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "aislemap".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let tui_mode = !options.mcp && !options.print;
        init_logging(if tui_mode { "off" } else { "warn" });
        let style = map_style(&options)?;

        if options.print {
            return print_frame(&options, &style);
        }

        if options.mcp {
            let mcp = aislemap::mcp::AislemapMcp::new(style);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let ui_state = Arc::new(Mutex::new(aislemap::ui::UiState::default()));
        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);
        let mcp = aislemap::mcp::AislemapMcp::new_with_ui_state(style.clone(), ui_state.clone());
        let tui_options = aislemap::tui::TuiOptions {
            style,
            seed: options.seed,
            initial_query: options.find,
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;
            log::info!("MCP listening on http://{}/mcp", listener.local_addr()?);

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = mcp.clone();
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    log::error!("MCP HTTP server error: {err}");
                }
            });

            let tui_ui_state = ui_state.clone();
            let tui_join = tokio::task::spawn_blocking(move || {
                aislemap::tui::run_with_ui_state(tui_options, tui_ui_state)
                    .map_err(|err| err.to_string())
            })
            .await;

            shutdown_token.cancel();
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| Box::new(std::io::Error::other(err)) as Box<dyn Error>)?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("aislemap: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_options, parse_size, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_tui_flags() {
        let options = parse(&["--find", "organic milk", "--direct", "--seed", "7"])
            .expect("parse options");
        assert_eq!(options.find.as_deref(), Some("organic milk"));
        assert!(options.direct);
        assert_eq!(options.seed, Some(7));
        assert!(!options.print);
        assert!(!options.mcp);
    }

    #[test]
    fn parses_print_flags() {
        let options = parse(&[
            "--print", "--find", "P004", "--walk", "3", "--frame", "12", "--size", "80x24",
        ])
        .expect("parse options");
        assert!(options.print);
        assert_eq!(options.walk, Some(3));
        assert_eq!(options.frame, Some(12));
        assert_eq!(options.size, Some((80, 24)));
    }

    #[test]
    fn parses_mcp_http_port() {
        let options = parse(&["--mcp-http-port", "1234"]).expect("parse options");
        assert_eq!(options.mcp_http_port, Some(1234));
        assert!(!options.mcp);
    }

    #[test]
    fn parses_stdio_mcp_with_style_flags() {
        let options = parse(&["--minimal", "--mcp"]).expect("parse options");
        assert!(options.mcp);
        assert!(options.minimal);
    }

    #[rstest]
    #[case(&["--mcp", "--mcp-http-port", "0"])]
    #[case(&["--mcp", "--print"])]
    #[case(&["--mcp", "--find", "milk"])]
    #[case(&["--print", "--mcp-http-port", "0"])]
    #[case(&["--frame", "3"])]
    #[case(&["--size", "80x24"])]
    #[case(&["--print", "--size", "80"])]
    #[case(&["--seed", "minus-one"])]
    #[case(&["--find"])]
    #[case(&["--direct", "--direct"])]
    #[case(&["--nope"])]
    #[case(&["positional"])]
    fn rejects_invalid_args(#[case] args: &[&str]) {
        parse(args).unwrap_err();
    }

    #[rstest]
    #[case("100x30", Some((100, 30)))]
    #[case("80X24", Some((80, 24)))]
    #[case("400x200", Some((400, 200)))]
    #[case("0x24", None)]
    #[case("19x24", None)]
    #[case("100000x100000", None)]
    #[case("80x201", None)]
    #[case("80x", None)]
    #[case("big", None)]
    fn parses_print_sizes(#[case] raw: &str, #[case] expected: Option<(usize, usize)>) {
        assert_eq!(parse_size(raw), expected);
    }
}
