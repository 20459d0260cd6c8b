use leptos::prelude::*;

use super::layout::{self, PieConfig, PieSlice};

/// Donut chart of category proportions with image labels on large slices.
#[component]
pub fn CategoryPie(
	#[prop(into)] data: Signal<Vec<PieSlice>>,
	#[prop(optional)] config: Option<PieConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (width, height, view_box) = (config.width, config.height, config.view_box());
	let slices = Memo::new(move |_| {
		let mut data = data.get();
		layout::layout(&mut data, &config)
	});

	view! {
		<svg
			class="hero-pie"
			width=width.to_string()
			height=height.to_string()
			viewBox=view_box
			style="max-width: 100%; height: auto;"
		>
			<g>
				{move || {
					slices
						.get()
						.into_iter()
						.map(|s| {
							view! {
								<path fill=s.color d=s.path>
									<title>{s.title}</title>
								</path>
							}
						})
						.collect_view()
				}}
			</g>
			// label placeholders at each centroid
			<g font-family="sans-serif" font-size="12" text-anchor="middle">
				{move || {
					slices
						.get()
						.into_iter()
						.map(|s| view! { <text transform=s.translate()></text> })
						.collect_view()
				}}
			</g>
			<defs>
				{move || {
					slices
						.get()
						.into_iter()
						.map(|s| {
							view! {
								<clipPath id=s.clip_id>
									<circle cx="0" cy="0" r=s.clip_radius.to_string() />
								</clipPath>
							}
						})
						.collect_view()
				}}
			</defs>
			<g>
				{move || {
					slices
						.get()
						.into_iter()
						.map(|s| {
							let translate = s.translate();
							let image = s.image.map(|img| {
								view! {
									<image
										href=img.href
										width=img.width.to_string()
										height=img.height.to_string()
										x=img.x.to_string()
										y=img.y.to_string()
										clip-path=img.clip_path
									/>
								}
							});
							view! { <g transform=translate>{image}</g> }
						})
						.collect_view()
				}}
			</g>
		</svg>
	}
}
