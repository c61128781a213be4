use clap::Parser;
use profile_lens::{cli, client, config, error, render, scanner, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use profile_lens_common::UploadWorkflow;
use session::ResultAction;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { paths, endpoint, json, interactive, no_progress } => {
            println!("🔍 profile-lens - 画像解析\n");

            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = client::AnalysisClient::new(endpoint)?;
            let mut workflow: UploadWorkflow<scanner::LocalImage> = UploadWorkflow::new()
                .with_min_images(config.min_images)
                .with_field_name(config.field_name.clone());
            let mut pending = paths;

            'session: loop {
                // 1. 取り込み
                println!("[1/3] 画像を読み込み中...");
                let (scanned, accepted) = match session::intake_paths(&mut workflow, &pending) {
                    Ok(counts) => counts,
                    Err(e) if interactive => {
                        // 入力ミスは選択を保ったまま再入力
                        eprintln!("✗ {}", e);
                        pending = session::prompt_paths()?;
                        if pending.is_empty() {
                            break 'session;
                        }
                        continue 'session;
                    }
                    Err(e) => return Err(e),
                };
                println!("✔ {}件中 {}枚の画像を追加", scanned, accepted);
                print!("{}", render::render_selection(&workflow));
                println!("{}\n", render::status_line(&workflow));

                if workflow.is_empty() && !interactive {
                    let joined: Vec<String> = pending.iter().map(|p| p.display().to_string()).collect();
                    return Err(error::ProfileLensError::NoImagesFound(joined.join(", ")));
                }

                // 2. 送信
                println!("[2/3] 解析中...");
                if let Err(e) = session::submit(&mut workflow, &client, !no_progress && !json).await {
                    eprintln!("✗ {}", e.user_message());
                    if !interactive {
                        return Err(e.into());
                    }
                    // 選択はそのまま。追加して再送信できる
                    pending = session::prompt_paths()?;
                    if pending.is_empty() {
                        break 'session;
                    }
                    continue 'session;
                }
                println!("✔ 解析完了\n");

                // 3. 結果表示
                println!("[3/3] 解析結果\n");
                if let Some(report) = workflow.report() {
                    if json {
                        println!("{}", serde_json::to_string_pretty(report)?);
                    } else {
                        print!("{}", render::render_report(report));
                    }
                }

                if !interactive {
                    break 'session;
                }

                loop {
                    match session::prompt_result_action()? {
                        ResultAction::Reanalyze => {
                            workflow.reset();
                            pending = session::prompt_paths()?;
                            if pending.is_empty() {
                                break 'session;
                            }
                            continue 'session;
                        }
                        ResultAction::Share => println!("{}", workflow.share_message()),
                        ResultAction::Quit => break 'session,
                    }
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  送信先(適用後): {}", config.resolve_endpoint(None));
                println!("  フィールド名: {}", config.field_name);
                println!("  最小枚数: {}", config.min_images);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
