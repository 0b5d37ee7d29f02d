//! Dictionary length report

use crate::wordbank::WordBank;
use colored::Colorize;

/// Print the word lengths the loaded dictionary can serve
pub fn print_lengths(bank: &WordBank) {
    if bank.is_empty() {
        println!("{}", "The dictionary is empty.".red());
        return;
    }

    println!("\n{} words loaded\n", bank.len().to_string().bold());
    println!("  Length  Words");
    println!("  ──────  ─────");

    let max = bank
        .available_lengths()
        .iter()
        .map(|&l| bank.count_of(l))
        .max()
        .unwrap_or(1);

    for length in bank.available_lengths() {
        let count = bank.count_of(length);
        let bar_len = (count * 30).div_ceil(max);
        let bar = "█".repeat(bar_len);
        println!("  {length:>6}  {count:>5}  {}", bar.cyan());
    }
    println!();
}
