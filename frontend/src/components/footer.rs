//! 页脚

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-8 bg-base-200 text-base-content mt-16">
            <aside>
                <p class="font-bold">"FounderNet"</p>
                <p class="text-sm opacity-70">"Where founders, mentors and investors meet."</p>
                <p class="text-xs opacity-50">"Demo build. All profiles are fictional sample data."</p>
            </aside>
        </footer>
    }
}
