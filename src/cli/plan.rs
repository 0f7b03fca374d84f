//! `plan` command

use std::collections::BTreeMap;

use clap::Args;

use crate::config::AllowancePaths;
use crate::display::format_plan_saved;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{Amount, Category};
use crate::services::Ledger;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Total allowance income (e.g. "20" or "20.00")
    #[arg(required_unless_present = "rate", conflicts_with = "rate")]
    pub income: Option<String>,

    /// Amount allocated to the 'save' category
    #[arg(long)]
    pub save: Option<String>,

    /// Amount allocated to the 'spend' category
    #[arg(long)]
    pub spend: Option<String>,

    /// Amount allocated to the 'share' category
    #[arg(long)]
    pub share: Option<String>,

    /// Amount allocated to the 'need' category
    #[arg(long)]
    pub need: Option<String>,

    /// Allowance per period; income becomes rate x periods
    #[arg(long, requires = "periods")]
    pub rate: Option<String>,

    /// Number of periods the rate is paid for
    #[arg(long, requires = "rate")]
    pub periods: Option<u32>,
}

impl PlanArgs {
    fn income(&self) -> AllowanceResult<Amount> {
        match (&self.income, &self.rate, self.periods) {
            (Some(income), _, _) => Ok(Amount::parse(income)?),
            (None, Some(rate), Some(periods)) => {
                Ok(Amount::for_periods(Amount::parse(rate)?, periods))
            }
            _ => Err(AllowanceError::Config(
                "Either an income or --rate with --periods is required".into(),
            )),
        }
    }

    /// Only the categories given on the command line
    fn allocations(&self) -> AllowanceResult<BTreeMap<Category, Amount>> {
        let flags = [
            (Category::Save, &self.save),
            (Category::Spend, &self.spend),
            (Category::Share, &self.share),
            (Category::Need, &self.need),
        ];

        let mut allocations = BTreeMap::new();
        for (category, value) in flags {
            if let Some(raw) = value {
                allocations.insert(category, Amount::parse(raw)?);
            }
        }
        Ok(allocations)
    }
}

pub fn handle_plan_command(paths: &AllowancePaths, args: PlanArgs) -> AllowanceResult<String> {
    let income = args.income()?;
    let allocations = args.allocations()?;

    let mut ledger = Ledger::open(paths)?;
    let plan = ledger.set_plan(income, allocations)?;

    Ok(format_plan_saved(&plan, &ledger.iter_categories()))
}
