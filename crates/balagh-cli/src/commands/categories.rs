use balagh_core::Category;

pub fn run_categories() {
    for line in format_category_lines() {
        println!("{line}");
    }
}

pub fn format_category_lines() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| {
            let marker = if *category == Category::default() {
                "  (default)"
            } else {
                ""
            };
            format!("{:<8}  {}{marker}", category.slug(), category.label())
        })
        .collect()
}
