mod booking_state;
