use ticket_office_test_utils::prelude::*;

use crate::server::{
    data::ticket::TicketFields,
    model::{
        db::TicketModel,
        session::Principal,
        ticket::{PassengerIdentity, TicketRequest},
    },
};

mod available_seats;

static TRAIN: &str = "Сапсан";
static DEPARTURE: &str = "Ленинградский вокзал";
static ARRIVAL: &str = "Московский вокзал";

/// Booking tables with one train of `total_seats` seats and both stations
async fn booking_setup(total_seats: i32) -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_booking_tables()
        .with_train(TRAIN, total_seats)
        .with_station(DEPARTURE)
        .with_station(ARRIVAL)
        .build()
        .await
}

fn ticket_request(seat_number: &str, passport_number: &str) -> TicketRequest {
    TicketRequest {
        train_name: TRAIN.to_string(),
        departure_station_name: DEPARTURE.to_string(),
        arrival_station_name: ARRIVAL.to_string(),
        seat_number: seat_number.to_string(),
        departure_time: test_departure_time(),
        arrival_time: test_arrival_time(),
        passenger: PassengerIdentity::new("Ivan", "Petrov", None, "4510", passport_number)
            .unwrap(),
        cashier_id: None,
    }
}

async fn principal(
    test: &TestContext,
    username: &str,
    is_admin: bool,
) -> Result<Principal, TestError> {
    let user = test.user().insert_user(username, is_admin).await?;

    Ok(Principal::from(&user))
}

/// Writable fields of a stored ticket, for writing past the booking engine's checks
fn stored_fields(ticket: &TicketModel) -> TicketFields {
    TicketFields {
        train_id: ticket.train_id,
        departure_station_id: ticket.departure_station_id,
        arrival_station_id: ticket.arrival_station_id,
        passenger_id: ticket.passenger_id,
        departure_time: ticket.departure_time,
        arrival_time: ticket.arrival_time,
        seat_number: ticket.seat_number,
    }
}
