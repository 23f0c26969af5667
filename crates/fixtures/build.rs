use stow_encoder::{BuildCtx, EmbedMode, Encoder};

fn main() {
	let ctx = BuildCtx::from_env().unwrap_or_else(|e| panic!("{e}"));

	Encoder::from_config_file(ctx.asset("stow.toml"))
		.and_then(|encoder| encoder.write_modes(&ctx, &EmbedMode::ALL))
		.unwrap_or_else(|e| panic!("failed to embed fixture assets: {e}"));
}
