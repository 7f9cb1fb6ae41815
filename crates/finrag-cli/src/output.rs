//! Terminal output helpers

use colored::Colorize;
use finrag_domain::RoutedAnswer;

use crate::di::HealthReport;

pub fn print_answer(answer: &RoutedAnswer) {
    println!("{} {}", "path:".dimmed(), answer.path_used.label().cyan());
    println!();
    println!("{}", answer.response);
}

pub fn print_health(report: &HealthReport) {
    print_check("qdrant collection", &report.qdrant);
    print_check("chat provider", &report.chat);
}

fn print_check(name: &str, result: &Result<bool, String>) {
    match result {
        Ok(true) => println!("{} {}", "ok".green().bold(), name),
        Ok(false) => println!("{} {}", "missing".yellow().bold(), name),
        Err(reason) => println!("{} {} ({})", "failed".red().bold(), name, reason),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
