use clap::Parser;
use roster_query::utils::{logger, validation::Validate};
use roster_query::{query, CliConfig, Student};

fn sample_roster() -> Vec<Student> {
    vec![
        Student::new(7, "Grace", "Hopper", "M3439"),
        Student::new(2, "Alan", "Turing", "M3438"),
        Student::new(5, "Ada", "Lovelace", "M3439"),
        Student::new(1, "Edsger", "Dijkstra", "M3438"),
        Student::new(4, "Barbara", "Liskov", "M3439"),
        Student::new(3, "Donald", "Knuth", "M3438"),
        Student::new(6, "Annie", "Easley", "M3439"),
    ]
}

fn print_students(students: &[Student], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(students)?);
    } else {
        for student in students {
            println!("{:>4}  {:<24} {}", student.id, student.full_name(), student.group);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let roster = sample_roster();
    tracing::info!("Loaded sample roster with {} students", roster.len());

    if let Some(group) = &config.group {
        let found = query::find_by_group(&roster, group);
        tracing::info!("{} students in group {}", found.len(), group);
        print_students(&found, config.json)?;

        let names = query::names_by_group(&roster, group);
        if config.json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            for (last, first) in &names {
                println!("      {} -> {}", last, first);
            }
        }
        return Ok(());
    }

    if let Some(name) = &config.first_name {
        let found = query::find_by_first_name(&roster, name);
        tracing::info!("{} students with first name {}", found.len(), name);
        return print_students(&found, config.json);
    }

    if let Some(name) = &config.last_name {
        let found = query::find_by_last_name(&roster, name);
        tracing::info!("{} students with last name {}", found.len(), name);
        return print_students(&found, config.json);
    }

    // No filter: the whole roster in name order, plus a short summary.
    print_students(&query::sorted_by_name(&roster), config.json)?;
    if !config.json {
        println!();
        println!("distinct first names: {}", query::distinct_first_names(&roster).len());
        println!("lowest id belongs to: {}", query::min_student_first_name(&roster));
    }
    Ok(())
}
