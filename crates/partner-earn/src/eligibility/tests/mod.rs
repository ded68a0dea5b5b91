mod common;
mod overrides;
mod partner_stage;
