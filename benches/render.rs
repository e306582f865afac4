//! Benchmarks for the ticket render and parse pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use kaartje::{layout_ticket, parse_svg, render_svg, Document, RenderOptions, TicketProfile};

const DAY_TICKET_DOG: &str = "Terms and conditions Day Ticket Dog

- The Day Ticket Dog is a ticket that allows a dog that is not transported in a basket, bag, cage or on your lap, to travel unlimitedly on the trains of NS and other train operators within the Netherlands. This also includes the Intercity direct and the domestic routes of the Intercity Berlin, Intercity Brussels and the ICE International. The Day Ticket Dog is not valid on the Nightjet and Eurostar.
- The Day Ticket Dog is only valid in combination with a valid ticket from the traveler himself. Upon inspection, the personal details on the Day Ticket Dog must match those of the traveler with whom the dog is traveling.
- The Day Ticket Dog is valid all day on the date indicated on the ticket from 00:00 am to 04:00 am the following morning, including rush hour.
- Dogs are not allowed on train replacement transport, such as coaches and NS buses, with the exception of assistance dogs.
- View all terms and conditions of the Day Ticket Dog via www.ns.nl/conditions-individual-tickets";

// ============================================================================
// Render pipeline
// ============================================================================

fn bench_layout(c: &mut Criterion) {
    let doc = Document::from_text(DAY_TICKET_DOG);
    let options = RenderOptions::default();

    c.bench_function("layout_ticket", |b| {
        b.iter(|| layout_ticket(&doc, &options));
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = Document::from_text(DAY_TICKET_DOG);
    let options = RenderOptions::default();

    c.bench_function("render_svg", |b| {
        b.iter(|| render_svg(&doc, &options));
    });
}

fn bench_render_compact(c: &mut Criterion) {
    let doc = Document::from_text(DAY_TICKET_DOG);
    let options = RenderOptions::new().with_profile(TicketProfile::compact());

    c.bench_function("render_svg_compact", |b| {
        b.iter(|| render_svg(&doc, &options));
    });
}

// ============================================================================
// Parse direction
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let doc = Document::from_text(DAY_TICKET_DOG);
    let svg = render_svg(&doc, &RenderOptions::default());

    c.bench_function("parse_svg", |b| {
        b.iter(|| parse_svg(&svg).unwrap());
    });
}

criterion_group!(
    benches,
    bench_layout,
    bench_render,
    bench_render_compact,
    bench_parse,
);
criterion_main!(benches);
