pub mod portfolio_content;
