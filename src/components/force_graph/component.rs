use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::render::{self, GraphFrame, PatternFrame};
use super::simulation::GraphConfig;
use super::state::{DragState, ForceGraphState};
use super::types::GraphData;
use crate::components::pointer::viewbox_point;

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;

/// Force-directed hero graph with image-filled nodes, drag and
/// click-to-highlight.
///
/// Links whose source or target is not among the nodes are dropped with a
/// debug log; the caller is responsible for sending consistent ids.
#[component]
pub fn RelationshipGraph(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: Option<GraphConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (width, height) = (config.width, config.height);
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame = RwSignal::new(GraphFrame::default());
	let patterns = RwSignal::new(Vec::<PatternFrame>::new());
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let GraphData { mut nodes, links } = data.get();
		let graph = ForceGraphState::new(&mut nodes, &links, config.clone());
		patterns.set(render::patterns(&graph));
		frame.set(render::frame(&graph));
		*state_init.borrow_mut() = Some(graph);

		if animate_init.borrow().is_some() {
			return;
		}
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.tick() {
					frame.set(render::frame(s));
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = viewbox_point(&ev, width, height) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(id) = s.node_at_position(x, y) {
				ev.prevent_default();
				s.drag_start(id);
				frame.set(render::frame(s));
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = viewbox_point(&ev, width, height) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag == DragState::Idle {
				let before = s.hovered;
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				if before != hovered {
					frame.set(render::frame(s));
				}
			} else {
				s.drag_move(x, y);
				frame.set(render::frame(s));
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag_end();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag_cancel();
			s.set_hover(None);
		}
	};

	let state_cl = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = viewbox_point(&ev, width, height) else {
			return;
		};
		if let Some(ref mut s) = *state_cl.borrow_mut() {
			s.click_at(x, y);
			frame.set(render::frame(s));
		}
	};

	view! {
		<svg
			class="hero-graph"
			width=width.to_string()
			height=height.to_string()
			viewBox=format!("0 0 {width} {height}")
			style="max-width: 100%; height: auto;"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
		>
			<defs>
				{move || {
					patterns
						.get()
						.into_iter()
						.map(|p| {
							let size = p.size.to_string();
							view! {
								<pattern id=p.id patternUnits="objectBoundingBox" width="1" height="1">
									<image
										href=p.image
										width=size.clone()
										height=size
										preserveAspectRatio="xMidYMid slice"
									/>
								</pattern>
							}
						})
						.collect_view()
				}}
			</defs>
			<g class="links">
				{move || {
					frame.with(|f| {
						f.links
							.iter()
							.map(|l| {
								view! {
									<line
										class="link"
										class:highlighted-link=l.highlighted
										x1=l.x1.to_string()
										y1=l.y1.to_string()
										x2=l.x2.to_string()
										y2=l.y2.to_string()
									/>
								}
							})
							.collect_view()
					})
				}}
			</g>
			<g class="nodes">
				{move || {
					frame.with(|f| {
						f.nodes
							.iter()
							.map(|n| {
								view! {
									<g class="node" id=n.dom_id.clone() transform=n.transform()>
										<circle
											r=n.radius.to_string()
											fill=n.fill.clone()
											class:highlighted-node=n.selected
											style=n.circle_style()
										/>
									</g>
								}
							})
							.collect_view()
					})
				}}
			</g>
		</svg>
	}
}
