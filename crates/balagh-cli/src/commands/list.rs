use balagh_core::feed::{list_view, FeedView, ListView, EMPTY_LIST_MESSAGE};

use crate::commands::common::{format_card_lines, load_reports, open_backend};
use crate::error::CliError;

pub async fn run_list(as_json: bool, global_profile: Option<&str>) -> Result<(), CliError> {
    let client = open_backend(global_profile)?;
    let reports = load_reports(&client, FeedView::List).await?;

    let cards = match list_view(&reports) {
        ListView::Cards(cards) => cards,
        ListView::Empty => Vec::new(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else if cards.is_empty() {
        println!("{EMPTY_LIST_MESSAGE}");
    } else {
        for line in format_card_lines(&cards) {
            println!("{line}");
        }
    }

    Ok(())
}
