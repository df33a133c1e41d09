use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::slot::{FileSlot, resolve_data_dir};
use crate::model::task::Category;
use crate::ops::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let store = TaskStore::load(FileSlot::new(data_dir));

    match cli.command {
        // main.rs routes the bare invocation to the TUI
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(store, args, json),
            Commands::List => cmd_list(store, json),
            Commands::Toggle(args) => cmd_toggle(store, args, json),
            Commands::Rm(args) => cmd_rm(store, args, json),
            Commands::Mv(args) => cmd_mv(store, args, json),
            Commands::Stats => cmd_stats(store, json),
            Commands::Theme(args) => cmd_theme(store, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(
    mut store: TaskStore<FileSlot>,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = Category::from_id(&args.category).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected work, personal, urgent, other)",
            args.category
        )
    })?;

    match store.add(&args.text, category)? {
        Some(id) => {
            if json {
                println!("{}", serde_json::json!({ "id": id }));
            } else {
                println!("{}", id);
            }
        }
        None => {
            if json {
                println!("{}", serde_json::json!({ "id": null }));
            } else {
                println!("nothing added (empty text)");
            }
        }
    }
    Ok(())
}

fn cmd_list(store: TaskStore<FileSlot>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&list_to_json(store.tasks()))?
        );
        return Ok(());
    }
    if store.is_empty() {
        println!("(no tasks)");
        return Ok(());
    }
    for (i, task) in store.tasks().iter().enumerate() {
        println!("{}", format_task_line(i + 1, task));
    }
    Ok(())
}

fn cmd_toggle(
    mut store: TaskStore<FileSlot>,
    args: ToggleArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let found = store.toggle(args.id)?;
    if json {
        println!("{}", serde_json::json!({ "id": args.id, "found": found }));
        return Ok(());
    }
    if found {
        let task = store.tasks().iter().find(|t| t.id == args.id);
        let state = task.map_or("", |t| if t.completed { "done" } else { "todo" });
        println!("{} {}", state, args.id);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_rm(
    mut store: TaskStore<FileSlot>,
    args: RmArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let removed = store.remove(args.id)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "id": args.id, "removed": removed })
        );
        return Ok(());
    }
    if removed {
        println!("removed {}", args.id);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_mv(
    mut store: TaskStore<FileSlot>,
    args: MvArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // 1-based display positions on the CLI
    let moved = if args.from == 0 || args.to == 0 {
        false
    } else {
        store.reorder(args.from - 1, args.to - 1)?
    };
    if json {
        println!("{}", serde_json::json!({ "moved": moved }));
        return Ok(());
    }
    if moved {
        println!("moved {} -> {}", args.from, args.to);
    } else {
        println!("nothing moved");
    }
    Ok(())
}

fn cmd_stats(store: TaskStore<FileSlot>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = store.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&stats))?);
    } else {
        println!(
            "{} / {} done ({:.0}%)",
            stats.completed,
            stats.total,
            stats.percent()
        );
    }
    Ok(())
}

fn cmd_theme(
    mut store: TaskStore<FileSlot>,
    args: ThemeArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.mode.as_deref() {
        None => {}
        Some("dark") => store.set_dark_mode(true)?,
        Some("light") => store.set_dark_mode(false)?,
        Some("toggle") => {
            store.toggle_dark_mode()?;
        }
        Some(other) => {
            return Err(format!("unknown mode '{}' (expected dark, light, toggle)", other).into());
        }
    }
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ThemeJson {
                dark_mode: store.dark_mode()
            })?
        );
    } else {
        println!("{}", if store.dark_mode() { "dark" } else { "light" });
    }
    Ok(())
}
