mod persistence;
mod prices;

pub use persistence::{
    export_comparison_csv, load_price_book, load_recipe, load_simulation, save_simulation,
};
pub use prices::PriceBook;
