use leptos::prelude::*;
use web_sys::{MouseEvent, WheelEvent};

use super::layout::{BarChart, BarConfig, BarDatum};
use super::zoom::ZoomTransform;
use crate::components::pointer::viewbox_point;

/// Top-N bar chart with hero images as x-axis labels.
///
/// With `zoomable`, the wheel zooms the x-axis about the pointer and dragging
/// pans it; bars, axis and tick images follow the band width.
#[component]
pub fn RankedBar(
	#[prop(into)] data: Signal<Vec<BarDatum>>,
	#[prop(optional)] config: Option<BarConfig>,
	#[prop(default = false)] zoomable: bool,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (width, height, margin_left) = (config.width, config.height, config.margin_left);
	let behavior = config.zoom();
	let transform = RwSignal::new(ZoomTransform::IDENTITY);
	let pan_from = StoredValue::new(None::<(f64, f64)>);

	let chart = Memo::new(move |_| {
		let mut data = data.get();
		let mut chart = BarChart::new(&mut data, config.clone());
		if zoomable {
			chart.apply_zoom(&transform.get());
		}
		chart
	});

	let on_wheel = move |ev: WheelEvent| {
		if !zoomable {
			return;
		}
		ev.prevent_default();
		let Some(point) = viewbox_point(&ev, width, height) else {
			return;
		};
		let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
		transform.update(|t| *t = behavior.scale_by(*t, factor, point));
	};

	let on_mousedown = move |ev: MouseEvent| {
		if zoomable {
			pan_from.set_value(viewbox_point(&ev, width, height));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((sx, sy)) = pan_from.get_value() else {
			return;
		};
		let Some((x, y)) = viewbox_point(&ev, width, height) else {
			return;
		};
		transform.update(|t| *t = behavior.pan_by(*t, x - sx, y - sy));
		pan_from.set_value(Some((x, y)));
	};

	let on_release = move |_: MouseEvent| pan_from.set_value(None);

	view! {
		<svg
			class="hero-bars"
			viewBox=format!("0 0 {width} {height}")
			width=width.to_string()
			height=height.to_string()
			style="max-width: 100%; height: auto;"
			on:wheel=on_wheel
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_release
			on:mouseleave=on_release
		>
			<g class="bars" fill="steelblue">
				{move || {
					chart
						.with(|c| c.bars())
						.into_iter()
						.map(|b| {
							view! {
								<rect
									x=b.x.to_string()
									y=b.y.to_string()
									height=b.height.to_string()
									width=b.width.to_string()
								/>
							}
						})
						.collect_view()
				}}
			</g>
			<g
				class="x-axis"
				transform=move || format!("translate(0,{})", chart.with(|c| c.x_axis_offset()))
				fill="none"
				font-size="10"
				font-family="sans-serif"
				text-anchor="middle"
			>
				<path class="domain" stroke="currentColor" d=move || chart.with(|c| c.x_axis_path()) />
				{move || {
					chart
						.with(|c| c.x_ticks())
						.into_iter()
						.map(|t| {
							view! {
								<g class="tick" opacity="1" transform=format!("translate({},0)", t.position)>
									<line stroke="currentColor" y2="0" />
									<image
										href=t.href
										width=t.image_width.to_string()
										height=t.image_height.to_string()
										x=t.image_x.to_string()
										y=t.image_y.to_string()
									/>
								</g>
							}
						})
						.collect_view()
				}}
			</g>
			<g
				class="y-axis"
				transform=format!("translate({margin_left},0)")
				fill="none"
				font-size="10"
				font-family="sans-serif"
				text-anchor="end"
			>
				{move || {
					chart
						.with(|c| c.y_ticks())
						.into_iter()
						.map(|t| {
							view! {
								<g class="tick" opacity="1" transform=format!("translate(0,{})", t.position)>
									<line stroke="currentColor" x2="-6" />
									<text fill="currentColor" x="-9" dy="0.32em">
										{t.label}
									</text>
								</g>
							}
						})
						.collect_view()
				}}
			</g>
		</svg>
	}
}
