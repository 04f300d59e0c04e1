use anyhow::Result;
use clap::Parser;
use gridpath_search::Strategy;

/// List the available strategies
#[derive(Parser, Debug)]
pub struct List {}

impl List {
    pub fn execute(self) -> Result<()> {
        for st in Strategy::ALL {
            let tag = if st.is_optimal() { "shortest" } else { "any" };
            println!("{:<10} {:<9} {}", st.name(), tag, st.description());
        }
        Ok(())
    }
}
