use crate::infra::{demo_applicants, load_catalog};
use clap::Args;
use patternworks::config::AppConfig;
use patternworks::error::AppError;
use patternworks::workflows::discounts::{
    Catalog, ConsoleMailer, DeliveryReceipt, DeliverySink, DiscountDelta, DiscountPublisher,
    DiscountSubscriber, Outbox, WishlistChange, WishlistObserver,
};
use patternworks::workflows::visa::{
    DenialReason, EvaluationEngine, EvaluationOutcome, VisaDecision,
};
use serde::Serialize;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct DiscountArgs {
    /// Optional `Product,Discount` CSV export used instead of the configured catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Emit machine-readable JSON instead of console e-mails.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct VisaArgs {
    /// Emit machine-readable JSON instead of the console report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct DiscountCycle {
    delta: DiscountDelta,
    notifications: usize,
}

#[derive(Debug, Serialize)]
struct DiscountDemoReport {
    cycles: Vec<DiscountCycle>,
    deliveries: Vec<DeliveryReceipt>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    discounts: DiscountDemoReport,
    visa: Vec<EvaluationOutcome>,
}

pub(crate) fn run_demo(args: DiscountArgs, config: &AppConfig) -> Result<(), AppError> {
    if args.json {
        let report = demo_report(args.catalog.as_deref(), config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    run_discount_demo(args, config)?;
    println!();
    run_visa_demo(VisaArgs { json: false }, config)
}

pub(crate) fn run_discount_demo(args: DiscountArgs, config: &AppConfig) -> Result<(), AppError> {
    if args.json {
        let report = discount_report(args.catalog.as_deref(), config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let catalog = load_catalog(args.catalog.as_deref(), &config.catalog)?;
    run_discount_scenario(catalog, Box::new(ConsoleMailer), true)?;
    Ok(())
}

pub(crate) fn run_visa_demo(args: VisaArgs, config: &AppConfig) -> Result<(), AppError> {
    let outcomes = visa_outcomes(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        println!("{}\n", render_visa_outcome(outcome));
    }
    Ok(())
}

fn demo_report(catalog: Option<&Path>, config: &AppConfig) -> Result<DemoReport, AppError> {
    Ok(DemoReport {
        discounts: discount_report(catalog, config)?,
        visa: visa_outcomes(config)?,
    })
}

fn discount_report(
    catalog: Option<&Path>,
    config: &AppConfig,
) -> Result<DiscountDemoReport, AppError> {
    let catalog = load_catalog(catalog, &config.catalog)?;
    let outbox = Outbox::new();
    let cycles = run_discount_scenario(catalog, Box::new(outbox.clone()), false)?;

    Ok(DiscountDemoReport {
        cycles,
        deliveries: outbox.receipts(),
    })
}

fn visa_outcomes(config: &AppConfig) -> Result<Vec<EvaluationOutcome>, AppError> {
    let engine = EvaluationEngine::new(config.evaluation.clone());
    let applicants = demo_applicants()?;
    Ok(engine.evaluate_all(&applicants))
}

/// Subscriber ali wishes for ps5, which goes on sale; ps4 is wished for and
/// discounted in a second cycle.
fn run_discount_scenario(
    mut catalog: Catalog,
    sink: Box<dyn DeliverySink>,
    console: bool,
) -> Result<Vec<DiscountCycle>, AppError> {
    let observer = Rc::new(RefCell::new(WishlistObserver::new(sink)));
    let mut publisher = DiscountPublisher::new();
    publisher.register(observer.clone());

    let ali = Rc::new(RefCell::new(DiscountSubscriber::new("ali", "ali@foo.bar")?));
    let change = ali.borrow_mut().add_to_wishlist(&catalog, "ps5");
    report_wishlist_change(change, "ps5", console);
    observer.borrow_mut().subscribe(ali.clone());

    let mut cycles = Vec::new();

    catalog.declare_discount("ps5")?;
    let delta = publisher.announce(&catalog);
    let notifications = observer.borrow().notify()?;
    cycles.push(DiscountCycle {
        delta,
        notifications,
    });

    let change = ali.borrow_mut().add_to_wishlist(&catalog, "ps4");
    report_wishlist_change(change, "ps4", console);
    catalog.declare_discount("ps4")?;
    let delta = publisher.announce(&catalog);
    let notifications = observer.borrow().notify()?;
    cycles.push(DiscountCycle {
        delta,
        notifications,
    });

    Ok(cycles)
}

fn report_wishlist_change(change: WishlistChange, product: &str, console: bool) {
    match change {
        WishlistChange::UnknownProduct if console => {
            println!("{product} is not in products, no action");
        }
        WishlistChange::UnknownProduct => {
            warn!(product, "wishlist product is not in products, no action");
        }
        WishlistChange::AlreadyPresent => {
            warn!(product, "product already on wishlist");
        }
        _ => {}
    }
}

fn render_visa_outcome(outcome: &EvaluationOutcome) -> String {
    let body = match &outcome.decision {
        VisaDecision::BackgroundCheckPending => outcome.decision.summary(),
        VisaDecision::Denied(DenialReason::BackgroundCheckFailed) => format!(
            "background check: NOT CLEARED status: {}",
            outcome.decision.status()
        ),
        VisaDecision::Granted | VisaDecision::Denied(DenialReason::InsufficientScore { .. }) => {
            format!(
                "applicant score: {}, status: {}",
                outcome.score,
                outcome.decision.status()
            )
        }
    };
    format!("results for {}:\n{}", outcome.applicant, body)
}
