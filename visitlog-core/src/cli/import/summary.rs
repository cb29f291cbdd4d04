use crate::import::ImportSummary;
use owo_colors::OwoColorize;

pub fn print_summary(summary: &ImportSummary) {
    println!("{}", "✔ Import finished".green().bold());
    println!("  files            {}", summary.files);
    println!("  lines            {}", summary.lines);
    println!("  recorded         {}", summary.recorded.green());
    println!("  noise            {}", summary.noise);
    println!("  ignored          {}", summary.ignored);
    println!("  without host     {}", summary.no_host);
    println!("  blank            {}", summary.blank);
    if summary.skipped > 0 {
        println!("  skipped          {}", summary.skipped.yellow());
    } else {
        println!("  skipped          0");
    }
    println!("  visitors created {}", summary.visitors_created);
    println!("  batches          {}", summary.batches);
}
