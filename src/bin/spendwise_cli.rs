use std::{env, process};

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use spendwise_core::{
    config::Preferences,
    init,
    query::CategoryFilter,
    store::JsonFileStore,
    tracker::ExpenseTracker,
    utils,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    let backend = JsonFileStore::open(utils::app_data_dir())?;

    match command.as_str() {
        "add" => {
            let amount = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let category = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let date = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let title = args.collect::<Vec<_>>().join(" ");

            let mut tracker = open_tracker(backend);
            let record = tracker.add(&title, &amount, &category, &date)?;
            println!(
                "Added {}: ${:.2} {} on {} (id {})",
                record.title, record.amount, record.category, record.date, record.id
            );
        }
        "list" => {
            let filter: CategoryFilter = match args.next() {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| format!("unknown category filter `{raw}`"))?,
                None => CategoryFilter::All,
            };
            let tracker = open_tracker(backend);
            let view = tracker.view(filter);
            if view.is_empty() {
                println!("No expenses recorded.");
            }
            for record in view {
                println!(
                    "{}  ${:>8.2}  {:<8}  {}  (id {})",
                    record.date, record.amount, record.category.as_str(), record.title, record.id
                );
            }
        }
        "summary" => {
            let today: NaiveDate = match args.next() {
                Some(raw) => raw.parse()?,
                None => Local::now().date_naive(),
            };
            let tracker = open_tracker(backend);
            let summary = tracker.summary(today);
            println!("Today ({today}): ${:.2}", summary.daily_total);
            println!("This month: ${:.2}", summary.monthly_total);
            println!("Average daily spend: ${:.2}", summary.average_daily_spend);
            match summary.highest_category {
                Some((category, amount)) => {
                    println!("Highest category: {category} (${amount:.2})")
                }
                None => println!("Highest category: -"),
            }
            println!("Expenses recorded: {}", summary.record_count);
            println!("By category:");
            for (category, total) in &summary.category_totals {
                println!("  {:<8} ${:.2}", category.as_str(), total);
            }
        }
        "delete" => {
            let id: Uuid = args
                .next()
                .unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                })
                .parse()?;
            let mut tracker = open_tracker(backend);
            if tracker.delete(id)? {
                println!("Expense deleted.");
            } else {
                println!("No expense found with id {id}.");
            }
        }
        "clear" => {
            let mut tracker = open_tracker(backend);
            tracker.clear()?;
            println!("All expenses cleared.");
        }
        "darkmode" => match args.next().as_deref() {
            Some("on") => {
                Preferences { dark_mode: true }.save(&backend)?;
                println!("Dark mode on.");
            }
            Some("off") => {
                Preferences { dark_mode: false }.save(&backend)?;
                println!("Dark mode off.");
            }
            None => {
                let prefs = Preferences::load(&backend);
                println!("Dark mode is {}.", if prefs.dark_mode { "on" } else { "off" });
            }
            Some(_) => {
                print_usage();
                process::exit(1);
            }
        },
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn open_tracker(backend: JsonFileStore) -> ExpenseTracker {
    let tracker = ExpenseTracker::open(Box::new(backend));
    if let Some(warning) = tracker.load_warning() {
        eprintln!("Warning: {warning}");
    }
    tracker
}

fn print_usage() {
    eprintln!(
        "Usage: spendwise_cli <command>\n\
         Commands:\n  \
         add <amount> <category> <YYYY-MM-DD> [title..]\n  \
         list [all|Food|Travel|Bills|Shopping|Other]\n  \
         summary [YYYY-MM-DD]\n  \
         delete <id>\n  \
         clear\n  \
         darkmode [on|off]"
    );
}
