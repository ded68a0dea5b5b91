use crate::infra::cli_registry;
use clap::Args;
use partner_earn::eligibility::{
    Channel, ContextFlags, EligibilityService, EvaluationContext, EvaluationResult,
    EvaluationStatus, PartnerId, RegionCode, Tier,
};
use partner_earn::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Region code (e.g. US, EU, UK, JP)
    #[arg(long)]
    pub(crate) region: String,
    /// Partner identifier (e.g. AERO, MART, GSTAY, STREAM)
    #[arg(long)]
    pub(crate) partner: String,
    /// Membership tier: Member, Silver, Gold or Platinum
    #[arg(long, value_parser = parse_tier)]
    pub(crate) tier: Tier,
    /// Purchase channel: Online, In-app or In-store
    #[arg(long, value_parser = parse_channel)]
    pub(crate) channel: Channel,
    /// A promotional window is active
    #[arg(long)]
    pub(crate) promo: bool,
    /// Paid with the co-branded card
    #[arg(long)]
    pub(crate) cobranded: bool,
    /// Corporate booking
    #[arg(long)]
    pub(crate) corporate: bool,
    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_tier(raw: &str) -> Result<Tier, String> {
    raw.parse()
}

fn parse_channel(raw: &str) -> Result<Channel, String> {
    raw.parse()
}

/// Member in EU booking AeroAir online while a promotion runs.
pub(crate) fn example_context() -> EvaluationContext {
    EvaluationContext {
        region: RegionCode::new("EU"),
        partner: PartnerId::new("AERO"),
        tier: Tier::Member,
        channel: Channel::Online,
        flags: ContextFlags {
            promo: true,
            cobranded: false,
            corporate: false,
        },
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let EvaluateArgs {
        region,
        partner,
        tier,
        channel,
        promo,
        cobranded,
        corporate,
        json,
    } = args;

    let ctx = EvaluationContext {
        region: RegionCode::new(region.trim()),
        partner: PartnerId::new(partner.trim()),
        tier,
        channel,
        flags: ContextFlags {
            promo,
            cobranded,
            corporate,
        },
    };

    let service = EligibilityService::new(cli_registry(catalog)?);
    let result = service.evaluate(&ctx);
    print_result(&result, json)
}

pub(crate) fn run_demo(args: DemoArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let service = EligibilityService::new(cli_registry(catalog)?);
    if !args.json {
        println!("Example scenario loaded: Member in EU with AeroAir during a promo.\n");
    }
    let result = service.evaluate(&example_context());
    print_result(&result, args.json)
}

pub(crate) fn run_partners(catalog: Option<PathBuf>) -> Result<(), AppError> {
    let service = EligibilityService::new(cli_registry(catalog)?);

    println!("Configured partners");
    for partner in service.partners() {
        println!("- {} ({}): {}", partner.id, partner.name, partner.description);
        if !partner.notes.is_empty() {
            println!("  notes: {}", partner.notes);
        }
        if partner.override_ids.is_empty() {
            println!("  overrides: none");
        } else {
            println!("  overrides: {}", partner.override_ids.join(", "));
        }
    }
    Ok(())
}

fn print_result(result: &EvaluationResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_evaluation(result)?);
    }
    Ok(())
}

fn badge_label(status: EvaluationStatus) -> &'static str {
    match status {
        EvaluationStatus::Eligible => "Eligible",
        EvaluationStatus::Conditional => "Conditional",
        EvaluationStatus::Blocked => "Blocked",
    }
}

pub(crate) fn render_evaluation(result: &EvaluationResult) -> Result<String, AppError> {
    let ctx = &result.raw.context;
    let mut out = String::from("Partner earn evaluation\n");

    out.push_str(&format!(
        "Context: region {}, partner {}, tier {}, channel {}\n",
        ctx.region, ctx.partner, ctx.tier, ctx.channel
    ));
    out.push_str(&format!("Status: {}\n", badge_label(result.status)));
    out.push_str(&format!("{}\n", result.summary()));

    out.push_str(&format!("\nBase program: {}\n", result.base_explanation));
    out.push_str(&format!("Partner rules: {}\n", result.partner_explanation));
    out.push_str(&format!("Exceptions: {}\n", result.exception_explanation));

    out.push_str("\nRule path\n");
    for line in &result.trace {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str("\nRaw snapshot\n");
    out.push_str(&serde_json::to_string_pretty(&result.raw)?);
    out.push('\n');

    Ok(out)
}
